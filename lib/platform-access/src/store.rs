//! Session persistence contract.
//!
//! The relay consumes sessions through this trait only; the binary ships
//! an in-memory implementation, and a deployment can substitute any
//! other backing store without touching the auth flow.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::session::{Session, SessionId};

/// Storage contract for session artifacts.
///
/// Reads and writes are atomic per request; no caller ever observes a
/// partially-written session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists a new session.
    async fn create(&self, session: Session) -> Result<(), StoreError>;

    /// Looks up a session by ID.
    ///
    /// Expiry is policed by the caller and the periodic sweep, not here.
    async fn find(&self, id: &SessionId) -> Result<Option<Session>, StoreError>;

    /// Replaces an existing session (token refresh).
    async fn update(&self, session: Session) -> Result<(), StoreError>;

    /// Deletes a session (logout).
    async fn delete(&self, id: &SessionId) -> Result<(), StoreError>;

    /// Deletes all expired sessions, returning how many were removed.
    async fn delete_expired(&self) -> Result<u64, StoreError>;
}
