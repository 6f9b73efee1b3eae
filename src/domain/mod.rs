//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `guide` - Step guide graph, navigation, sessions and definitions

pub mod foundation;
pub mod guide;
