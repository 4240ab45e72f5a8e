//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables
//! (`SESSION__SECRET`, `OIDC__CLIENT_ID`, `WEBHOOK__GENERATE_URL`, ...).
//!
//! See [`OidcConfig`](copper_quill_platform_access::OidcConfig) and
//! [`WebhookConfig`](copper_quill_webhook::WebhookConfig) for the
//! provider and webhook sections.

use copper_quill_platform_access::OidcConfig;
use copper_quill_webhook::WebhookConfig;
use serde::Deserialize;

/// Minimum length of the session secret, in bytes.
///
/// The cookie encryption key is derived from it; anything shorter is
/// rejected at startup rather than silently weakening the cookies.
pub const MIN_SESSION_SECRET_BYTES: usize = 32;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Session configuration.
    pub session: SessionConfig,

    /// OIDC authentication configuration.
    pub oidc: OidcConfig,

    /// Outbound webhook configuration.
    pub webhook: WebhookConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret the session cookie encryption key is derived from.
    pub secret: String,

    /// Session duration in minutes.
    #[serde(default = "default_session_duration_minutes")]
    pub duration_minutes: i64,

    /// Interval between session cleanup runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true; set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,

    /// Where to send the browser after a successful sign-in.
    #[serde(default = "default_redirect")]
    pub login_redirect: String,

    /// Where to send the browser after logout.
    #[serde(default = "default_redirect")]
    pub logout_redirect: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_session_duration_minutes() -> i64 {
    60
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

fn default_secure_cookies() -> bool {
    true
}

fn default_redirect() -> String {
    "/".to_string()
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid,
    /// including a session secret shorter than
    /// [`MIN_SESSION_SECRET_BYTES`].
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if config.session.secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(config::ConfigError::Message(format!(
                "session secret must be at least {MIN_SESSION_SECRET_BYTES} bytes"
            )));
        }

        Ok(config)
    }
}
