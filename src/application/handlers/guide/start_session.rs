//! StartGuideSessionHandler - Command handler for starting a guide session.
//!
//! A new session begins at the guide's entry step with its own cursor.
//! Sessions idle for longer than the configured timeout are evicted first,
//! so abandoned sessions do not hold slots under the session cap.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::guide::{GuideGraph, GuideSession};
use crate::ports::GuideSessionStore;

/// How many sessions may exist at once and how long an untouched one lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// Command to start a new guide session.
#[derive(Debug, Clone, Default)]
pub struct StartGuideSessionCommand;

/// Result of a successfully started session.
#[derive(Debug)]
pub struct StartGuideSessionResult {
    pub session: GuideSession,
}

/// Error type for starting a guide session.
#[derive(Debug, Clone)]
pub enum StartGuideSessionError {
    /// The store already holds the configured maximum number of sessions.
    SessionLimitReached(usize),
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for StartGuideSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartGuideSessionError::SessionLimitReached(max) => {
                write!(f, "Session limit of {} reached", max)
            }
            StartGuideSessionError::Infrastructure(msg) => {
                write!(f, "Infrastructure error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StartGuideSessionError {}

impl From<DomainError> for StartGuideSessionError {
    fn from(err: DomainError) -> Self {
        StartGuideSessionError::Infrastructure(err.to_string())
    }
}

/// Handler for starting guide sessions.
pub struct StartGuideSessionHandler {
    graph: Arc<GuideGraph>,
    store: Arc<dyn GuideSessionStore>,
    limits: SessionLimits,
}

impl StartGuideSessionHandler {
    pub fn new(
        graph: Arc<GuideGraph>,
        store: Arc<dyn GuideSessionStore>,
        limits: SessionLimits,
    ) -> Self {
        Self {
            graph,
            store,
            limits,
        }
    }

    pub async fn handle(
        &self,
        _cmd: StartGuideSessionCommand,
    ) -> Result<StartGuideSessionResult, StartGuideSessionError> {
        // 1. Free slots held by abandoned sessions
        let cutoff = Timestamp::now().saturating_sub(self.limits.idle_timeout);
        let evicted = self.store.evict_idle(cutoff).await?;
        if evicted > 0 {
            debug!(evicted, "Evicted idle guide sessions");
        }

        // 2. Cap check and insert happen in one store operation
        let session = GuideSession::start(self.graph.clone());
        self.store
            .save(&session, self.limits.max_sessions)
            .await
            .map_err(|e| match e.code {
                ErrorCode::SessionLimitReached => {
                    StartGuideSessionError::SessionLimitReached(self.limits.max_sessions)
                }
                _ => StartGuideSessionError::from(e),
            })?;

        info!(
            session_id = %session.id(),
            step = %session.current_step().key(),
            "Guide session started"
        );

        Ok(StartGuideSessionResult { session })
    }
}
