//! TriggerStepHandler - Command handler for host trigger events.
//!
//! One handler serves both triggers: the trigger names the edge, the session's
//! current step decides where that edge leads. A refused trigger leaves the
//! session exactly as it was and hands it back so the host can keep showing
//! the current step.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ErrorCode, GuideSessionId, StepKey};
use crate::domain::guide::{GuideError, GuideSession, Trigger};
use crate::ports::{GuideSessionStore, SessionModification};

/// Command to apply a trigger to a session.
#[derive(Debug, Clone)]
pub struct TriggerStepCommand {
    pub session_id: GuideSessionId,
    pub trigger: Trigger,
}

/// Result of an accepted trigger.
#[derive(Debug)]
pub struct TriggerStepResult {
    /// The session, now on its new step.
    pub session: GuideSession,
    /// The step the session was on before the trigger.
    pub previous: StepKey,
}

/// Error type for applying a trigger.
#[derive(Debug, Clone)]
pub enum TriggerStepError {
    /// Session not found.
    NotFound(GuideSessionId),
    /// The current step has no edge for this trigger.
    NoTransition {
        session: Box<GuideSession>,
        error: GuideError,
    },
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for TriggerStepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerStepError::NotFound(id) => write!(f, "Guide session not found: {}", id),
            TriggerStepError::NoTransition { error, .. } => write!(f, "{}", error),
            TriggerStepError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for TriggerStepError {}

impl From<DomainError> for TriggerStepError {
    fn from(err: DomainError) -> Self {
        TriggerStepError::Infrastructure(err.to_string())
    }
}

/// Handler for trigger events.
pub struct TriggerStepHandler {
    store: Arc<dyn GuideSessionStore>,
}

impl TriggerStepHandler {
    pub fn new(store: Arc<dyn GuideSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: TriggerStepCommand,
    ) -> Result<TriggerStepResult, TriggerStepError> {
        let trigger = cmd.trigger;

        // Navigate and persist as one store operation
        let outcome = self
            .store
            .modify(
                &cmd.session_id,
                Box::new(move |session: &mut GuideSession| session.trigger(trigger).map(|_| ())),
            )
            .await
            .map_err(|e| match e.code {
                ErrorCode::GuideSessionNotFound => TriggerStepError::NotFound(cmd.session_id),
                _ => TriggerStepError::from(e),
            })?;

        match outcome {
            SessionModification::Applied(session) => {
                let previous = session
                    .previous_step()
                    .cloned()
                    .unwrap_or_else(|| session.current_step().key().clone());

                info!(
                    session_id = %cmd.session_id,
                    from = %previous,
                    to = %session.current_step().key(),
                    trigger = %trigger,
                    "Guide advanced"
                );

                Ok(TriggerStepResult { session, previous })
            }
            SessionModification::Refused { session, error } => {
                debug!(
                    session_id = %cmd.session_id,
                    step = %session.current_step().key(),
                    trigger = %trigger,
                    "Trigger refused: no transition"
                );
                Err(TriggerStepError::NoTransition {
                    session: Box::new(session),
                    error,
                })
            }
        }
    }
}
