//! Shared application state.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use copper_quill_platform_access::SessionStore;
use copper_quill_webhook::{GenerationClient, PublishClient};
use std::sync::Arc;

use crate::auth::OidcClient;
use crate::config::SessionConfig;

/// State shared by all request handlers.
pub struct AppState {
    /// OIDC client for authentication.
    pub oidc_client: OidcClient,
    /// Session store (in-memory by default, swappable via the contract).
    pub sessions: Arc<dyn SessionStore>,
    /// Session configuration.
    pub session_config: SessionConfig,
    /// Key for encrypting cookies, derived from the session secret.
    pub cookie_key: Key,
    /// Client for the content-generation webhook.
    pub generation: GenerationClient,
    /// Client for the publish webhook.
    pub publisher: PublishClient,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        oidc_client: OidcClient,
        sessions: Arc<dyn SessionStore>,
        session_config: SessionConfig,
        generation: GenerationClient,
        publisher: PublishClient,
    ) -> Self {
        let cookie_key = Key::derive_from(session_config.secret.as_bytes());
        Self {
            oidc_client,
            sessions,
            session_config,
            cookie_key,
            generation,
            publisher,
        }
    }
}

// PrivateCookieJar requires Key to be extractable from state
impl FromRef<Arc<AppState>> for Key {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.cookie_key.clone()
    }
}
