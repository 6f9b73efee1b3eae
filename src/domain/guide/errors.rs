//! Guide error types.
//!
//! Two kinds only: a graph that cannot be built is a [`ConfigurationError`]
//! and is fatal at load time; a refused navigation is [`GuideError::NoTransition`]
//! and leaves the cursor where it was.

use thiserror::Error;

use crate::domain::foundation::{StepKey, ValidationError};

use super::Edge;

/// Message shown to the host when a trigger has nowhere to go.
pub const NO_FURTHER_STEPS: &str = "No further steps available.";

/// The guide graph is malformed and must not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Guide graph has no steps")]
    EmptyGraph,

    #[error("Step '{0}' is defined more than once")]
    DuplicateStep(StepKey),

    #[error("Entry step '{0}' is not defined")]
    UnknownEntry(StepKey),

    #[error("Step '{step}' has a '{edge}' edge to undefined step '{target}'")]
    DanglingEdge {
        step: StepKey,
        edge: Edge,
        target: StepKey,
    },

    #[error("Invalid guide definition: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Guide definition could not be parsed: {0}")]
    Parse(String),
}

/// Runtime navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideError {
    #[error("No further steps available. (step '{step}' has no '{edge}' edge)")]
    NoTransition { step: StepKey, edge: Edge },
}
