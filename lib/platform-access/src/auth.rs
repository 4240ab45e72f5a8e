//! Claim and view types exchanged between the OIDC layer and the session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::user::UserProfile;

/// Claims extracted from a verified OIDC ID token.
///
/// These are the normalized fields used to build the session identity.
#[derive(Debug, Clone)]
pub struct OidcClaims {
    /// The subject claim (unique user identifier from the provider).
    pub subject: String,
    /// The issuer URL.
    pub issuer: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Display name (optional, from name or preferred_username).
    pub display_name: Option<String>,
    /// Avatar URL (optional, from the picture claim).
    pub picture: Option<String>,
}

impl OidcClaims {
    /// Creates a new set of OIDC claims.
    #[must_use]
    pub fn new(subject: String, issuer: String) -> Self {
        Self {
            subject,
            issuer,
            email: None,
            display_name: None,
            picture: None,
        }
    }

    /// Sets the email claim.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_picture(mut self, picture: Option<String>) -> Self {
        self.picture = picture;
        self
    }

    /// Builds the session identity from these claims.
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        UserProfile::new(self.subject)
            .with_name(self.display_name)
            .with_email(self.email)
            .with_picture(self.picture)
    }
}

/// The client-facing session object.
///
/// Serialized as the body of the session endpoint so client code can
/// read the signed-in identity and the access token it will need for
/// publishing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The signed-in user's identity.
    pub user: UserProfile,
    /// The provider access token, copied from the session.
    pub access_token: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oidc_claims_builder() {
        let claims = OidcClaims::new(
            "sub_123".to_string(),
            "https://www.linkedin.com/oauth".to_string(),
        )
        .with_email(Some("user@example.com".to_string()))
        .with_display_name(Some("Test User".to_string()))
        .with_picture(Some("https://cdn.example.com/p.jpg".to_string()));

        assert_eq!(claims.subject, "sub_123");
        assert_eq!(claims.issuer, "https://www.linkedin.com/oauth");
        assert_eq!(claims.email, Some("user@example.com".to_string()));
        assert_eq!(claims.display_name, Some("Test User".to_string()));
        assert_eq!(claims.picture, Some("https://cdn.example.com/p.jpg".to_string()));
    }

    #[test]
    fn claims_into_profile_maps_subject_to_id() {
        let profile = OidcClaims::new(
            "sub_123".to_string(),
            "https://www.linkedin.com/oauth".to_string(),
        )
        .with_display_name(Some("Test User".to_string()))
        .into_profile();

        assert_eq!(profile.id(), "sub_123");
        assert_eq!(profile.name(), Some("Test User"));
    }

    #[test]
    fn session_view_serializes_camel_case() {
        let view = SessionView {
            user: UserProfile::new("sub_123".to_string()),
            access_token: "tok".to_string(),
            expires_at: Utc::now(),
        };

        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["accessToken"], "tok");
        assert!(json.get("expiresAt").is_some());
        assert_eq!(json["user"]["id"], "sub_123");
    }
}
