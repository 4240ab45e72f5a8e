//! Platform access and session management for copper-quill.
//!
//! This crate provides:
//! - The user identity carried by a session (`UserProfile`)
//! - Session management (`Session`, `SessionId`, `SessionView`)
//! - OIDC provider configuration (`OidcConfig`)
//! - The session persistence contract (`SessionStore`)
//!
//! # Session Model
//!
//! A session is created after a successful OAuth Authorization Code
//! exchange and carries the provider-issued access token for the
//! lifetime of the session. The token is the credential later forwarded
//! to the publish webhook; it lives only inside the session artifact and
//! the client-facing [`SessionView`] built from it.
//!
//! # Example
//!
//! ```
//! use copper_quill_platform_access::{Session, SessionId, UserProfile};
//! use chrono::Duration;
//!
//! let profile = UserProfile::new("urn:li:person:abc123".to_string())
//!     .with_name(Some("Alice Example".to_string()))
//!     .with_email(Some("alice@example.com".to_string()));
//!
//! let session = Session::new(
//!     SessionId::new("sess_abc123".to_string()),
//!     profile,
//!     Duration::minutes(60),
//!     "provider-access-token".to_string(),
//!     None,
//! );
//!
//! assert!(session.is_valid());
//! assert_eq!(session.access_token(), "provider-access-token");
//! ```

pub mod auth;
pub mod error;
pub mod oidc;
pub mod session;
pub mod store;
pub mod user;

// Re-export main types at crate root
pub use auth::{OidcClaims, SessionView};
pub use error::StoreError;
pub use oidc::OidcConfig;
pub use session::{Session, SessionId};
pub use store::SessionStore;
pub use user::UserProfile;
