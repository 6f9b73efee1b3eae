//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GuideSource` - Loads and validates the guide graph at startup
//! - `GuideSessionStore` - Keeps running guide sessions between triggers

mod guide_session_store;
mod guide_source;

pub use guide_session_store::{GuideSessionStore, SessionChange, SessionModification};
pub use guide_source::{GuideSource, GuideSourceError};
