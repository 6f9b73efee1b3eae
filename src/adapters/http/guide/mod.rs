//! HTTP adapter for the guide module.
//!
//! This module exposes guide sessions via REST endpoints. Every session walks
//! the same loaded guide with its own cursor; the host renders the returned
//! step view and posts back one trigger per user answer.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::GuideAppState;
pub use routes::guide_router;
