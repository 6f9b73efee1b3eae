//! Guide session store port.
//!
//! Defines the contract for keeping running guide sessions between host
//! trigger events. Each stored session carries its own cursor; the graph it
//! walks is shared and never written.
//!
//! Every write that depends on what is already stored (the session cap, a
//! cursor move) is a single store operation, so overlapping requests cannot
//! interleave between the read and the write.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GuideSessionId, Timestamp};
use crate::domain::guide::{GuideError, GuideSession};

/// A change applied to one stored session while the store holds it exclusively.
///
/// Returning `Err` leaves the stored session untouched.
pub type SessionChange = Box<dyn FnOnce(&mut GuideSession) -> Result<(), GuideError> + Send>;

/// Outcome of [`GuideSessionStore::modify`].
#[derive(Debug, Clone)]
pub enum SessionModification {
    /// The change succeeded and the changed session was stored.
    Applied(GuideSession),
    /// The change was refused; `session` is the stored, unchanged session.
    Refused {
        session: GuideSession,
        error: GuideError,
    },
}

/// Store port for GuideSession persistence.
#[async_trait]
pub trait GuideSessionStore: Send + Sync {
    /// Save a new session unless the store already holds `max_sessions`.
    ///
    /// # Errors
    ///
    /// - `SessionLimitReached` if the store is full
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &GuideSession, max_sessions: usize) -> Result<(), DomainError>;

    /// Apply `change` to a stored session atomically with respect to every
    /// other store operation.
    ///
    /// # Errors
    ///
    /// - `GuideSessionNotFound` if the session doesn't exist
    async fn modify(
        &self,
        id: &GuideSessionId,
        change: SessionChange,
    ) -> Result<SessionModification, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GuideSessionId) -> Result<Option<GuideSession>, DomainError>;

    /// Delete a session. Returns `true` if a session was removed.
    async fn delete(&self, id: &GuideSessionId) -> Result<bool, DomainError>;

    /// Remove sessions whose last activity is before `cutoff`.
    /// Returns how many were removed.
    async fn evict_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError>;

    /// Number of sessions currently held.
    async fn count(&self) -> Result<usize, DomainError>;
}
