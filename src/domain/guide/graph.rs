//! GuideGraph - the immutable, validated set of steps.
//!
//! A graph can only be obtained through [`GuideGraph::new`], which checks every
//! edge target against the key set. Holding a `GuideGraph` therefore means
//! every edge resolves and the entry step exists.

use std::collections::BTreeMap;

use crate::domain::foundation::StepKey;

use super::{ConfigurationError, Step};

/// Immutable mapping from step key to step, with a designated entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideGraph {
    entry: StepKey,
    steps: BTreeMap<StepKey, Step>,
}

impl GuideGraph {
    /// Builds and validates a graph.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the graph is empty, a key repeats, the
    /// entry is undefined, or any edge points at an undefined step.
    pub fn new(
        entry: StepKey,
        steps: impl IntoIterator<Item = Step>,
    ) -> Result<Self, ConfigurationError> {
        let mut by_key = BTreeMap::new();
        for step in steps {
            let key = step.key().clone();
            if by_key.insert(key.clone(), step).is_some() {
                return Err(ConfigurationError::DuplicateStep(key));
            }
        }

        if by_key.is_empty() {
            return Err(ConfigurationError::EmptyGraph);
        }
        if !by_key.contains_key(&entry) {
            return Err(ConfigurationError::UnknownEntry(entry));
        }

        for step in by_key.values() {
            for (edge, target) in step.edges() {
                if !by_key.contains_key(target) {
                    return Err(ConfigurationError::DanglingEdge {
                        step: step.key().clone(),
                        edge,
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(Self {
            entry,
            steps: by_key,
        })
    }

    pub fn entry_key(&self) -> &StepKey {
        &self.entry
    }

    /// Returns the entry step.
    pub fn entry(&self) -> &Step {
        // Entry membership is checked in `new`; indexing cannot miss.
        &self.steps[&self.entry]
    }

    pub fn step(&self, key: &StepKey) -> Option<&Step> {
        self.steps.get(key)
    }

    pub fn contains(&self, key: &StepKey) -> bool {
        self.steps.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in key order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values()
    }

    /// Steps whose edges only lead back to themselves.
    pub fn terminal_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values().filter(|step| step.is_terminal())
    }
}
