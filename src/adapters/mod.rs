//! Adapters - Implementations of port interfaces.
//!
//! - `guide_source` - Guide graph loaders (bundled guide, YAML file)
//! - `storage` - Session store implementations
//! - `http` - REST API built on axum

pub mod guide_source;
pub mod http;
pub mod storage;
