//! In-memory session store.
//!
//! The default implementation of the
//! [`SessionStore`](copper_quill_platform_access::SessionStore)
//! contract. Sessions live in a map behind an async `RwLock`; expired
//! entries are removed lazily on access and swept by the periodic
//! cleanup task spawned at startup.

use async_trait::async_trait;
use copper_quill_platform_access::{Session, SessionId, SessionStore, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Map-backed session store.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session: Session) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session.id().clone(), session);
        Ok(())
    }

    async fn find(&self, id: &SessionId) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn update(&self, session: Session) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session.id().clone(), session);
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), StoreError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, StoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.is_valid());
        Ok((before - sessions.len()) as u64)
    }
}

/// Generates a unique session ID using ULID.
#[must_use]
pub fn generate_session_id() -> SessionId {
    SessionId::new(ulid::Ulid::new().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use copper_quill_platform_access::UserProfile;

    fn test_session(id: &str, duration: Duration) -> Session {
        Session::new(
            SessionId::new(id.to_string()),
            UserProfile::new("sub_123".to_string()),
            duration,
            "access_token".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn create_and_find_roundtrip() {
        let store = MemorySessionStore::new();
        let session = test_session("sess_1", Duration::hours(1));
        store.create(session.clone()).await.expect("create");

        let found = store
            .find(&SessionId::new("sess_1".to_string()))
            .await
            .expect("find");
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = MemorySessionStore::new();
        let found = store
            .find(&SessionId::new("nope".to_string()))
            .await
            .expect("find");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let store = MemorySessionStore::new();
        let id = SessionId::new("sess_1".to_string());
        store
            .create(test_session("sess_1", Duration::hours(1)))
            .await
            .expect("create");

        store.delete(&id).await.expect("delete");
        assert!(store.find(&id).await.expect("find").is_none());
    }

    #[tokio::test]
    async fn update_replaces_tokens() {
        let store = MemorySessionStore::new();
        let mut session = test_session("sess_1", Duration::hours(1));
        store.create(session.clone()).await.expect("create");

        session.refresh("new_token".to_string(), None, Duration::hours(1));
        store.update(session).await.expect("update");

        let found = store
            .find(&SessionId::new("sess_1".to_string()))
            .await
            .expect("find")
            .expect("session present");
        assert_eq!(found.access_token(), "new_token");
    }

    #[tokio::test]
    async fn delete_expired_sweeps_only_expired_sessions() {
        let store = MemorySessionStore::new();
        store
            .create(test_session("expired", Duration::seconds(-1)))
            .await
            .expect("create");
        store
            .create(test_session("live", Duration::hours(1)))
            .await
            .expect("create");

        let deleted = store.delete_expired().await.expect("sweep");
        assert_eq!(deleted, 1);
        assert!(
            store
                .find(&SessionId::new("expired".to_string()))
                .await
                .expect("find")
                .is_none()
        );
        assert!(
            store
                .find(&SessionId::new("live".to_string()))
                .await
                .expect("find")
                .is_some()
        );
    }

    #[test]
    fn session_ids_are_unique() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
    }
}
