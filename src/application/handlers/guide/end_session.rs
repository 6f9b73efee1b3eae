//! EndGuideSessionHandler - Command handler for tearing down a session.
//!
//! Ending a session discards its cursor. The shared graph is untouched.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, GuideSessionId};
use crate::ports::GuideSessionStore;

/// Command to end a session.
#[derive(Debug, Clone)]
pub struct EndGuideSessionCommand {
    pub session_id: GuideSessionId,
}

/// Error type for ending a session.
#[derive(Debug, Clone)]
pub enum EndGuideSessionError {
    /// Session not found.
    NotFound(GuideSessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for EndGuideSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndGuideSessionError::NotFound(id) => write!(f, "Guide session not found: {}", id),
            EndGuideSessionError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for EndGuideSessionError {}

impl From<DomainError> for EndGuideSessionError {
    fn from(err: DomainError) -> Self {
        EndGuideSessionError::Infrastructure(err.to_string())
    }
}

/// Handler for ending sessions.
pub struct EndGuideSessionHandler {
    store: Arc<dyn GuideSessionStore>,
}

impl EndGuideSessionHandler {
    pub fn new(store: Arc<dyn GuideSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndGuideSessionCommand) -> Result<(), EndGuideSessionError> {
        if !self.store.delete(&cmd.session_id).await? {
            return Err(EndGuideSessionError::NotFound(cmd.session_id));
        }

        info!(session_id = %cmd.session_id, "Guide session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryGuideSessionStore;
    use crate::domain::guide::{first_aid_graph, GuideSession};

    #[tokio::test]
    async fn ending_removes_session() {
        let store = Arc::new(InMemoryGuideSessionStore::new());
        let session = GuideSession::start(Arc::new(first_aid_graph().unwrap()));
        store.save(&session, 10).await.unwrap();

        let handler = EndGuideSessionHandler::new(store.clone());
        handler
            .handle(EndGuideSessionCommand {
                session_id: session.id(),
            })
            .await
            .unwrap();

        assert!(store.find_by_id(&session.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ending_twice_reports_not_found() {
        let store = Arc::new(InMemoryGuideSessionStore::new());
        let session = GuideSession::start(Arc::new(first_aid_graph().unwrap()));
        store.save(&session, 10).await.unwrap();
        let handler = EndGuideSessionHandler::new(store);
        let cmd = EndGuideSessionCommand {
            session_id: session.id(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(EndGuideSessionError::NotFound(_))));
    }
}
