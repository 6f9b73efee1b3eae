//! ResetGuideSessionHandler - Command handler for returning a session to the entry step.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, GuideSessionId};
use crate::domain::guide::GuideSession;
use crate::ports::{GuideSessionStore, SessionModification};

/// Command to reset a session.
#[derive(Debug, Clone)]
pub struct ResetGuideSessionCommand {
    pub session_id: GuideSessionId,
}

/// Result of a successful reset.
#[derive(Debug)]
pub struct ResetGuideSessionResult {
    pub session: GuideSession,
}

/// Error type for resetting a session.
#[derive(Debug, Clone)]
pub enum ResetGuideSessionError {
    /// Session not found.
    NotFound(GuideSessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for ResetGuideSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetGuideSessionError::NotFound(id) => write!(f, "Guide session not found: {}", id),
            ResetGuideSessionError::Infrastructure(msg) => {
                write!(f, "Infrastructure error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ResetGuideSessionError {}

impl From<DomainError> for ResetGuideSessionError {
    fn from(err: DomainError) -> Self {
        ResetGuideSessionError::Infrastructure(err.to_string())
    }
}

/// Handler for resetting sessions.
pub struct ResetGuideSessionHandler {
    store: Arc<dyn GuideSessionStore>,
}

impl ResetGuideSessionHandler {
    pub fn new(store: Arc<dyn GuideSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ResetGuideSessionCommand,
    ) -> Result<ResetGuideSessionResult, ResetGuideSessionError> {
        let outcome = self
            .store
            .modify(
                &cmd.session_id,
                Box::new(|session: &mut GuideSession| {
                    session.reset();
                    Ok(())
                }),
            )
            .await
            .map_err(|e| match e.code {
                ErrorCode::GuideSessionNotFound => ResetGuideSessionError::NotFound(cmd.session_id),
                _ => ResetGuideSessionError::from(e),
            })?;

        // Reset never refuses; both arms carry the stored session.
        let session = match outcome {
            SessionModification::Applied(session) => session,
            SessionModification::Refused { session, .. } => session,
        };

        info!(session_id = %cmd.session_id, "Guide session reset");

        Ok(ResetGuideSessionResult { session })
    }
}
