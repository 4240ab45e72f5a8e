//! Authentication module for the copper-quill server.
//!
//! This module provides:
//! - The OAuth Authorization Code + OpenID Connect flow against the
//!   identity provider (endpoints configured explicitly, no discovery)
//! - Capture of the provider access token into the session on callback
//! - Session extractors for the API handlers
//! - The in-memory session store
//!
//! The provider access token is the whole point of signing in: it is
//! written into the session exactly once, on the callback turn, and read
//! back by the session endpoint and the publish proxy. It is never
//! logged.

pub mod middleware;
pub mod oidc;
pub mod routes;
pub mod store;

pub use middleware::{OptionalAuth, RequireAuth};
pub use oidc::OidcClient;
pub use routes::{callback, login, logout, session};
pub use store::{MemorySessionStore, generate_session_id};
