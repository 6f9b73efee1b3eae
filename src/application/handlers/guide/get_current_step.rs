//! GetCurrentStepHandler - Query handler for a session's current step.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, GuideSessionId};
use crate::domain::guide::GuideSession;
use crate::ports::GuideSessionStore;

/// Query to get the step a session is on.
#[derive(Debug, Clone)]
pub struct GetCurrentStepQuery {
    pub session_id: GuideSessionId,
}

/// Result of a successful query.
pub type GetCurrentStepResult = GuideSession;

/// Error type for getting the current step.
#[derive(Debug, Clone)]
pub enum GetCurrentStepError {
    /// Session not found.
    NotFound(GuideSessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for GetCurrentStepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetCurrentStepError::NotFound(id) => write!(f, "Guide session not found: {}", id),
            GetCurrentStepError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for GetCurrentStepError {}

impl From<DomainError> for GetCurrentStepError {
    fn from(err: DomainError) -> Self {
        GetCurrentStepError::Infrastructure(err.to_string())
    }
}

/// Handler for reading a session's current step.
pub struct GetCurrentStepHandler {
    store: Arc<dyn GuideSessionStore>,
}

impl GetCurrentStepHandler {
    pub fn new(store: Arc<dyn GuideSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetCurrentStepQuery,
    ) -> Result<GetCurrentStepResult, GetCurrentStepError> {
        self.store
            .find_by_id(&query.session_id)
            .await?
            .ok_or(GetCurrentStepError::NotFound(query.session_id))
    }
}
