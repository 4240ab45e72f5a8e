//! User identity carried by a session.
//!
//! There is no user database: the identity provider's subject claim is
//! the user id, and the profile fields travel inside the session.

use serde::{Deserialize, Serialize};

/// The normalized identity of an authenticated user.
///
/// Built from the ID token claims on the OAuth callback: the subject
/// claim becomes the user id, and the optional display fields are copied
/// from the standard OIDC claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider subject claim - the user id.
    id: String,
    /// Display name (from the name claim, if present).
    name: Option<String>,
    /// Email address (from the email claim, if present).
    email: Option<String>,
    /// Avatar URL (from the picture claim, if present).
    picture: Option<String>,
}

impl UserProfile {
    /// Creates a profile for the given provider subject.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            name: None,
            email: None,
            picture: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_picture(mut self, picture: Option<String>) -> Self {
        self.picture = picture;
        self
    }

    /// Returns the user id (the provider subject claim).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name, if available.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email address, if available.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the avatar URL, if available.
    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_builder() {
        let profile = UserProfile::new("sub_123".to_string())
            .with_name(Some("Test User".to_string()))
            .with_email(Some("user@example.com".to_string()))
            .with_picture(Some("https://cdn.example.com/p.jpg".to_string()));

        assert_eq!(profile.id(), "sub_123");
        assert_eq!(profile.name(), Some("Test User"));
        assert_eq!(profile.email(), Some("user@example.com"));
        assert_eq!(profile.picture(), Some("https://cdn.example.com/p.jpg"));
    }

    #[test]
    fn profile_optional_fields_default_to_none() {
        let profile = UserProfile::new("sub_123".to_string());
        assert!(profile.name().is_none());
        assert!(profile.email().is_none());
        assert!(profile.picture().is_none());
    }

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = UserProfile::new("sub_123".to_string())
            .with_email(Some("user@example.com".to_string()));

        let json = serde_json::to_string(&profile).expect("serialize");
        let parsed: UserProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(profile, parsed);
    }
}
