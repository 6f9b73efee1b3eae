//! In-Memory Guide Session Store Adapter
//!
//! Keeps running guide sessions in a process-local map. Every operation runs
//! under the map's lock, so a capped save or a session change never
//! interleaves with another request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, GuideSessionId, Timestamp};
use crate::domain::guide::GuideSession;
use crate::ports::{GuideSessionStore, SessionChange, SessionModification};

/// In-memory storage for guide sessions
#[derive(Debug, Clone)]
pub struct InMemoryGuideSessionStore {
    sessions: Arc<RwLock<HashMap<GuideSessionId, GuideSession>>>,
}

impl InMemoryGuideSessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryGuideSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GuideSessionStore for InMemoryGuideSessionStore {
    async fn save(&self, session: &GuideSession, max_sessions: usize) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= max_sessions && !sessions.contains_key(&session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionLimitReached,
                format!("Session limit of {} reached", max_sessions),
            )
            .with_detail("max_sessions", max_sessions.to_string()));
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn modify(
        &self,
        id: &GuideSessionId,
        change: SessionChange,
    ) -> Result<SessionModification, DomainError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::GuideSessionNotFound,
                format!("Guide session not found: {}", id),
            )
            .with_detail("session_id", id.to_string())
        })?;

        let mut changed = stored.clone();
        match change(&mut changed) {
            Ok(()) => {
                *stored = changed.clone();
                Ok(SessionModification::Applied(changed))
            }
            Err(error) => Ok(SessionModification::Refused {
                session: stored.clone(),
                error,
            }),
        }
    }

    async fn find_by_id(&self, id: &GuideSessionId) -> Result<Option<GuideSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn delete(&self, id: &GuideSessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn evict_idle(&self, cutoff: Timestamp) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle_since(cutoff));
        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guide::{first_aid_graph, GuideGraph, Trigger};
    use std::time::Duration;

    fn graph() -> Arc<GuideGraph> {
        Arc::new(first_aid_graph().unwrap())
    }

    #[tokio::test]
    async fn save_and_find_session() {
        let store = InMemoryGuideSessionStore::new();
        let session = GuideSession::start(graph());

        store.save(&session, 10).await.unwrap();
        let found = store.find_by_id(&session.id()).await.unwrap().unwrap();

        assert_eq!(found.id(), session.id());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn save_refuses_past_limit() {
        let store = InMemoryGuideSessionStore::new();
        store.save(&GuideSession::start(graph()), 1).await.unwrap();

        let err = store
            .save(&GuideSession::start(graph()), 1)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionLimitReached);
        assert_eq!(err.details.get("max_sessions"), Some(&"1".to_string()));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_respect_limit() {
        let store = InMemoryGuideSessionStore::new();

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                let session = GuideSession::start(graph());
                tokio::spawn(async move { store.save(&session, 3).await })
            })
            .collect();

        let mut saved = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                saved += 1;
            }
        }

        assert_eq!(saved, 3);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let store = InMemoryGuideSessionStore::new();
        let found = store.find_by_id(&GuideSessionId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn modify_persists_cursor() {
        let store = InMemoryGuideSessionStore::new();
        let session = GuideSession::start(graph());
        store.save(&session, 10).await.unwrap();

        let outcome = store
            .modify(
                &session.id(),
                Box::new(|s: &mut GuideSession| s.trigger(Trigger::Negative).map(|_| ())),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, SessionModification::Applied(_)));
        let found = store.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(found.current_step().key().as_str(), "NoBreathingCheckPulse");
        assert_eq!(found.transitions(), 1);
    }

    #[tokio::test]
    async fn refused_modify_keeps_stored_session() {
        let store = InMemoryGuideSessionStore::new();
        let session = GuideSession::start(graph());
        store.save(&session, 10).await.unwrap();

        let outcome = store
            .modify(
                &session.id(),
                Box::new(|s: &mut GuideSession| {
                    s.reset();
                    Err(crate::domain::guide::GuideError::NoTransition {
                        step: s.current_step().key().clone(),
                        edge: crate::domain::guide::Edge::No,
                    })
                }),
            )
            .await
            .unwrap();

        match outcome {
            SessionModification::Refused { session: kept, .. } => {
                assert_eq!(kept.last_activity_at(), session.last_activity_at());
            }
            other => panic!("expected Refused, got {:?}", other),
        }
        let found = store.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(found.last_activity_at(), session.last_activity_at());
    }

    #[tokio::test]
    async fn modify_unknown_session_fails() {
        let store = InMemoryGuideSessionStore::new();

        let err = store
            .modify(&GuideSessionId::new(), Box::new(|_: &mut GuideSession| Ok(())))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::GuideSessionNotFound);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_modifies_are_not_lost() {
        let store = InMemoryGuideSessionStore::new();
        let session = GuideSession::start(graph());
        store.save(&session, 10).await.unwrap();

        let tasks: Vec<_> = (0..2)
            .map(|_| {
                let store = store.clone();
                let id = session.id();
                tokio::spawn(async move {
                    store
                        .modify(&id, Box::new(|s: &mut GuideSession| s.trigger(Trigger::Negative).map(|_| ())))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let found = store.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(found.current_step().key().as_str(), "StartChestCompressions");
        assert_eq!(found.transitions(), 2);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let store = InMemoryGuideSessionStore::new();
        let session = GuideSession::start(graph());
        store.save(&session, 10).await.unwrap();

        assert!(store.delete(&session.id()).await.unwrap());
        assert!(!store.delete(&session.id()).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn evict_idle_removes_only_stale_sessions() {
        let store = InMemoryGuideSessionStore::new();
        let stale = GuideSession::start(graph());
        store.save(&stale, 10).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        let cutoff = Timestamp::now();
        let fresh = GuideSession::start(graph());
        store.save(&fresh, 10).await.unwrap();

        let evicted = store.evict_idle(cutoff).await.unwrap();

        assert_eq!(evicted, 1);
        assert!(store.find_by_id(&stale.id()).await.unwrap().is_none());
        assert!(store.find_by_id(&fresh.id()).await.unwrap().is_some());
    }
}
