//! Content-generation webhook client.

use serde::{Deserialize, Serialize};

use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::reply::extract_content;

/// Writing style for a generated post.
///
/// The wire values match what the generation workflow expects verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStyle {
    Professional,
    #[serde(rename = "Viral Hook")]
    ViralHook,
    Storytelling,
    Contrarian,
}

/// Target length for a generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostLength {
    Short,
    Medium,
    Long,
}

/// Parameters for one generation call.
///
/// Serializes to exactly the `{topic, style, length}` body the
/// generation webhook consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// What the post should be about.
    pub topic: String,
    /// Writing style.
    pub style: PostStyle,
    /// Target length.
    pub length: PostLength,
}

/// Client for the content-generation webhook.
pub struct GenerationClient {
    http: reqwest::Client,
    url: String,
}

impl GenerationClient {
    /// Creates a client from webhook configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| WebhookError::Configuration {
                details: e.to_string(),
            })?;

        Ok(Self {
            http,
            url: config.generate_url.clone(),
        })
    }

    /// Requests generated content for the given parameters.
    ///
    /// Issues exactly one outbound call; the response body is normalized
    /// via [`extract_content`]. No retry on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the webhook answers with
    /// a non-success status.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, WebhookError> {
        tracing::debug!(url = %self.url, topic = %request.topic, "Calling generation webhook");

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| WebhookError::ConnectionFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Generation webhook returned error status");
            return Err(WebhookError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebhookError::ConnectionFailed {
                reason: e.to_string(),
            })?;

        Ok(extract_content(&body))
    }
}
