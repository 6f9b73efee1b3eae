//! Storage Adapters
//!
//! Implementations of the GuideSessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryGuideSessionStore** - Keeps sessions in memory for the life of the process

mod in_memory_guide_session_store;

pub use in_memory_guide_session_store::InMemoryGuideSessionStore;
