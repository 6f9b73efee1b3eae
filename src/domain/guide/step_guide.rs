//! StepGuide - cursor over a guide graph.
//!
//! The graph is shared read-only; the cursor is the only mutable state and
//! changes only through [`StepGuide::advance`] and [`StepGuide::reset`].

use std::sync::Arc;

use crate::domain::foundation::StepKey;

use super::{Edge, GuideError, GuideGraph, Step, Trigger};

/// Walks a [`GuideGraph`] one labeled edge at a time.
#[derive(Debug, Clone)]
pub struct StepGuide {
    graph: Arc<GuideGraph>,
    cursor: StepKey,
}

impl StepGuide {
    /// Creates a guide positioned at the graph's entry step.
    pub fn new(graph: Arc<GuideGraph>) -> Self {
        let cursor = graph.entry_key().clone();
        Self { graph, cursor }
    }

    pub fn graph(&self) -> &GuideGraph {
        &self.graph
    }

    pub fn cursor(&self) -> &StepKey {
        &self.cursor
    }

    /// Returns the step at the cursor.
    pub fn current_step(&self) -> &Step {
        // The cursor only ever holds keys the graph contains.
        self.graph.step(&self.cursor).unwrap_or_else(|| self.graph.entry())
    }

    /// Moves the cursor along `edge`.
    ///
    /// A self-looping edge is a valid transition: the cursor stays put and the
    /// same step comes back.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::NoTransition` if the current step does not define
    /// `edge`. The cursor is left untouched.
    pub fn advance(&mut self, edge: Edge) -> Result<&Step, GuideError> {
        let current = self.current_step();
        let target = current
            .edge(edge)
            .filter(|target| self.graph.contains(target))
            .cloned()
            .ok_or_else(|| GuideError::NoTransition {
                step: current.key().clone(),
                edge,
            })?;

        self.cursor = target;
        Ok(self.current_step())
    }

    /// Advances along the edge bound to a host trigger.
    pub fn trigger(&mut self, trigger: Trigger) -> Result<&Step, GuideError> {
        self.advance(trigger.edge())
    }

    /// Puts the cursor back on the entry step.
    pub fn reset(&mut self) {
        self.cursor = self.graph.entry_key().clone();
    }

    pub fn is_at_terminal(&self) -> bool {
        self.current_step().is_terminal()
    }
}
