//! OIDC (OpenID Connect) provider configuration.
//!
//! Endpoint discovery is deliberately not used: the issuer, the three
//! provider endpoints, and the JWKS URL are configured explicitly, with
//! defaults pointing at LinkedIn's OpenID Connect surface.

use serde::{Deserialize, Serialize};

/// Configuration for the OIDC identity provider.
///
/// Fields with defaults can be omitted when loading from environment
/// variables; only the client credentials and redirect URI are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OidcConfig {
    /// The OAuth2 client ID registered with the provider.
    client_id: String,
    /// The OAuth2 client secret.
    client_secret: String,
    /// The redirect URI for the OAuth2 callback
    /// (e.g., "https://app.example.com/api/auth/callback").
    redirect_uri: String,
    /// The token issuer expected in ID tokens.
    #[serde(default = "default_issuer_url")]
    issuer_url: String,
    /// The provider's authorization endpoint.
    #[serde(default = "default_authorization_endpoint")]
    authorization_endpoint: String,
    /// The provider's token endpoint.
    #[serde(default = "default_token_endpoint")]
    token_endpoint: String,
    /// The JWKS endpoint used to verify ID token signatures.
    #[serde(default = "default_jwks_endpoint")]
    jwks_endpoint: String,
    /// OAuth2 scopes to request as a comma-separated string.
    ///
    /// The default includes `w_member_social`, the elevated scope the
    /// publish action needs. A deployment that trims it still signs in
    /// fine; the publish call then fails with the provider's
    /// authorization error.
    #[serde(default = "default_scopes")]
    scopes: String,
}

fn default_issuer_url() -> String {
    "https://www.linkedin.com/oauth".to_string()
}

fn default_authorization_endpoint() -> String {
    "https://www.linkedin.com/oauth/v2/authorization".to_string()
}

fn default_token_endpoint() -> String {
    "https://www.linkedin.com/oauth/v2/accessToken".to_string()
}

fn default_jwks_endpoint() -> String {
    "https://www.linkedin.com/oauth/openid/jwks".to_string()
}

fn default_scopes() -> String {
    "openid,profile,email,w_member_social".to_string()
}

impl OidcConfig {
    /// Creates a configuration with LinkedIn defaults for the endpoints.
    #[must_use]
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            issuer_url: default_issuer_url(),
            authorization_endpoint: default_authorization_endpoint(),
            token_endpoint: default_token_endpoint(),
            jwks_endpoint: default_jwks_endpoint(),
            scopes: default_scopes(),
        }
    }

    /// Returns the OAuth2 client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the OAuth2 client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the OAuth2 redirect URI.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Returns the expected token issuer.
    #[must_use]
    pub fn issuer_url(&self) -> &str {
        &self.issuer_url
    }

    /// Returns the authorization endpoint.
    #[must_use]
    pub fn authorization_endpoint(&self) -> &str {
        &self.authorization_endpoint
    }

    /// Returns the token endpoint.
    #[must_use]
    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }

    /// Returns the JWKS endpoint.
    #[must_use]
    pub fn jwks_endpoint(&self) -> &str {
        &self.jwks_endpoint
    }

    /// Returns the OAuth2 scopes to request, parsed from the
    /// comma-separated string.
    #[must_use]
    pub fn scopes(&self) -> Vec<&str> {
        self.scopes.split(',').map(str::trim).collect()
    }

    /// Returns the raw scopes string.
    #[must_use]
    pub fn scopes_raw(&self) -> &str {
        &self.scopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_linkedin_defaults() {
        let config = OidcConfig::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            "https://app.example.com/api/auth/callback".to_string(),
        );

        assert_eq!(config.client_id(), "client-id");
        assert_eq!(config.issuer_url(), "https://www.linkedin.com/oauth");
        assert_eq!(
            config.authorization_endpoint(),
            "https://www.linkedin.com/oauth/v2/authorization"
        );
        assert_eq!(
            config.token_endpoint(),
            "https://www.linkedin.com/oauth/v2/accessToken"
        );
        assert_eq!(
            config.jwks_endpoint(),
            "https://www.linkedin.com/oauth/openid/jwks"
        );
    }

    #[test]
    fn default_scopes_include_publish_scope() {
        let config = OidcConfig::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            "https://app.example.com/api/auth/callback".to_string(),
        );

        let scopes = config.scopes();
        assert!(scopes.contains(&"openid"));
        assert!(scopes.contains(&"profile"));
        assert!(scopes.contains(&"email"));
        assert!(scopes.contains(&"w_member_social"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{
            "client_id": "my-client",
            "client_secret": "secret",
            "redirect_uri": "https://app.example.com/api/auth/callback"
        }"#;

        let config: OidcConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.client_id(), "my-client");
        assert_eq!(config.issuer_url(), "https://www.linkedin.com/oauth");
        assert!(config.scopes().contains(&"w_member_social"));
    }

    #[test]
    fn scopes_parses_comma_separated() {
        let json = r#"{
            "client_id": "my-client",
            "client_secret": "secret",
            "redirect_uri": "https://app.example.com/api/auth/callback",
            "scopes": "openid, profile, email"
        }"#;

        let config: OidcConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.scopes(), vec!["openid", "profile", "email"]);
        // Trimming the publish scope is allowed; sign-in still works.
        assert!(!config.scopes().contains(&"w_member_social"));
    }
}
