//! Session management for authenticated users.
//!
//! Sessions are created after a successful OAuth callback and carry both
//! the user's identity and the provider-issued access token. The token
//! never outlives the session: destroying the session (logout or expiry)
//! discards the token with it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::SessionView;
use crate::user::UserProfile;

/// Unique identifier for a session.
///
/// Session IDs are opaque strings generated during session creation and
/// are the only value that reaches the browser cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new session ID from a string.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the session ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Represents an active authenticated session.
///
/// A session always carries a provider access token: there is no
/// authenticated state without one, because the publish path is the
/// reason the user signs in at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,
    /// The authenticated user's identity.
    profile: UserProfile,
    /// When the session was created.
    created_at: DateTime<Utc>,
    /// When the session expires.
    expires_at: DateTime<Utc>,
    /// Provider access token issued during the code exchange.
    access_token: String,
    /// Provider refresh token (if the provider issued one).
    refresh_token: Option<String>,
}

impl Session {
    /// Creates a new session valid for the given duration.
    #[must_use]
    pub fn new(
        id: SessionId,
        profile: UserProfile,
        duration: Duration,
        access_token: String,
        refresh_token: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            profile,
            created_at: now,
            expires_at: now + duration,
            access_token,
            refresh_token,
        }
    }

    /// Returns the session ID.
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the authenticated user's identity.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Returns when the session was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the session expires.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the provider access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the provider refresh token, if present.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns true if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns true if the session is still valid (not expired).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Updates the session tokens and extends expiration.
    ///
    /// Called when the provider reissues tokens for an existing session.
    pub fn refresh(
        &mut self,
        access_token: String,
        refresh_token: Option<String>,
        duration: Duration,
    ) {
        self.access_token = access_token;
        self.refresh_token = refresh_token;
        self.expires_at = Utc::now() + duration;
    }

    /// Builds the client-facing view of this session.
    ///
    /// The access token is copied onto the view so client code can read
    /// it, mirroring how the session object is handed to the browser.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            user: self.profile.clone(),
            access_token: self.access_token.clone(),
            expires_at: self.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session_id() -> SessionId {
        SessionId::new("sess_test_123".to_string())
    }

    fn test_profile() -> UserProfile {
        UserProfile::new("sub_123".to_string()).with_name(Some("Test User".to_string()))
    }

    fn test_session(duration: Duration) -> Session {
        Session::new(
            test_session_id(),
            test_profile(),
            duration,
            "access_token_123".to_string(),
            Some("refresh_token_456".to_string()),
        )
    }

    #[test]
    fn session_id_display() {
        let id = test_session_id();
        assert_eq!(id.to_string(), "sess_test_123");
    }

    #[test]
    fn session_id_from_str() {
        let id: SessionId = "test_session".into();
        assert_eq!(id.as_str(), "test_session");
    }

    #[test]
    fn new_session_has_correct_fields() {
        let before = Utc::now();
        let session = test_session(Duration::hours(1));
        let after = Utc::now();

        assert_eq!(session.id(), &test_session_id());
        assert_eq!(session.profile().id(), "sub_123");
        assert!(session.created_at() >= before);
        assert!(session.created_at() <= after);
        assert!(session.expires_at() > session.created_at());
        assert_eq!(session.access_token(), "access_token_123");
        assert_eq!(session.refresh_token(), Some("refresh_token_456"));
    }

    #[test]
    fn session_expiration() {
        // Negative duration means already expired
        let session = test_session(Duration::seconds(-1));
        assert!(session.is_expired());
        assert!(!session.is_valid());
    }

    #[test]
    fn session_not_expired() {
        let session = test_session(Duration::hours(1));
        assert!(!session.is_expired());
        assert!(session.is_valid());
    }

    #[test]
    fn session_refresh_replaces_tokens_and_extends_expiry() {
        let mut session = test_session(Duration::seconds(1));
        let old_expires = session.expires_at();

        std::thread::sleep(std::time::Duration::from_millis(10));
        session.refresh(
            "new_access_token".to_string(),
            None,
            Duration::hours(2),
        );

        assert_eq!(session.access_token(), "new_access_token");
        assert!(session.refresh_token().is_none());
        assert!(session.expires_at() > old_expires);
    }

    #[test]
    fn session_view_exposes_access_token() {
        let session = test_session(Duration::hours(1));
        let view = session.view();

        assert_eq!(view.access_token, session.access_token());
        assert_eq!(view.user.id(), session.profile().id());
        assert_eq!(view.expires_at, session.expires_at());
    }

    #[test]
    fn session_serialization_roundtrip() {
        let session = test_session(Duration::hours(1));
        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(session, parsed);
    }
}
