//! Guide Source Adapters
//!
//! Implementations of the GuideSource port.
//!
//! ## Available Adapters
//!
//! - **YamlFileGuideSource** - Reads a YAML guide definition from disk
//! - **EmbeddedGuideSource** - Serves the bundled first-aid guide
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::guide_source::{EmbeddedGuideSource, YamlFileGuideSource};
//!
//! // Custom guide on disk
//! let source = YamlFileGuideSource::new("./guides/first_aid.yaml");
//!
//! // Bundled guide
//! let source = EmbeddedGuideSource::new();
//! ```

mod embedded_guide_source;
mod yaml_file_guide_source;

pub use embedded_guide_source::EmbeddedGuideSource;
pub use yaml_file_guide_source::YamlFileGuideSource;
