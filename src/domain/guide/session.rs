//! GuideSession - one host-side instance of a [`StepGuide`].

use std::sync::Arc;

use crate::domain::foundation::{GuideSessionId, StepKey, Timestamp};

use super::{GuideError, GuideGraph, Step, StepGuide, Trigger};

/// A running walk through a guide.
///
/// Every session owns its own cursor; the graph behind it is shared.
#[derive(Debug, Clone)]
pub struct GuideSession {
    id: GuideSessionId,
    guide: StepGuide,
    previous_step: Option<StepKey>,
    transitions: u32,
    started_at: Timestamp,
    last_activity_at: Timestamp,
}

impl GuideSession {
    /// Starts a session at the graph's entry step.
    pub fn start(graph: Arc<GuideGraph>) -> Self {
        let now = Timestamp::now();
        Self {
            id: GuideSessionId::new(),
            guide: StepGuide::new(graph),
            previous_step: None,
            transitions: 0,
            started_at: now,
            last_activity_at: now,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> GuideSessionId {
        self.id
    }

    pub fn current_step(&self) -> &Step {
        self.guide.current_step()
    }

    /// Step the last accepted trigger left; `None` after start or reset.
    pub fn previous_step(&self) -> Option<&StepKey> {
        self.previous_step.as_ref()
    }

    /// Number of accepted transitions since start or last reset.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn last_activity_at(&self) -> Timestamp {
        self.last_activity_at
    }

    /// True if nothing happened on this session since `cutoff`.
    pub fn is_idle_since(&self, cutoff: Timestamp) -> bool {
        self.last_activity_at < cutoff
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Applies a host trigger.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::NoTransition` if the current step has no edge for
    /// the trigger; the session is left unchanged.
    pub fn trigger(&mut self, trigger: Trigger) -> Result<&Step, GuideError> {
        let from = self.guide.cursor().clone();
        self.guide.trigger(trigger)?;
        self.previous_step = Some(from);
        self.transitions = self.transitions.saturating_add(1);
        self.last_activity_at = Timestamp::now();
        Ok(self.guide.current_step())
    }

    pub fn reset(&mut self) {
        self.guide.reset();
        self.previous_step = None;
        self.transitions = 0;
        self.last_activity_at = Timestamp::now();
    }
}
