//! Publish webhook client.
//!
//! Forwards generated content plus the caller's access token to the
//! externally hosted workflow that performs the actual LinkedIn post.
//! The token appears only in the outbound request body, never in logs.

use chrono::Utc;
use serde::Serialize;

use crate::config::WebhookConfig;
use crate::error::WebhookError;

/// Body sent to the publish webhook.
#[derive(Debug, Serialize)]
struct PublishPayload<'a> {
    action: &'static str,
    content: &'a str,
    #[serde(rename = "accessToken")]
    access_token: &'a str,
    timestamp: String,
}

impl<'a> PublishPayload<'a> {
    fn new(content: &'a str, access_token: &'a str) -> Self {
        Self {
            action: "publish",
            content,
            access_token,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Client for the publish webhook.
pub struct PublishClient {
    http: reqwest::Client,
    url: String,
}

impl PublishClient {
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
            url: config.publish_url.clone(),
        })
    }

    /// Delivers content and token to the publish webhook.
    ///
    /// One outbound call, no retry, no idempotency key: duplicate calls
    /// produce duplicate publish attempts downstream. Success is
    /// determined solely by the HTTP status; the raw response body is
    /// returned for the caller to relay.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the webhook answers with
    /// a non-success status.
    pub async fn publish(
        &self,
        content: &str,
        access_token: &str,
    ) -> Result<String, WebhookError> {
        tracing::debug!(url = %self.url, content_len = content.len(), "Calling publish webhook");

        let payload = PublishPayload::new(content, access_token);

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| WebhookError::ConnectionFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Publish webhook returned error status");
            return Err(WebhookError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| WebhookError::ConnectionFailed {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn payload_carries_publish_action_and_token() {
        let payload = PublishPayload::new("Hello LinkedIn", "tok_123");
        let json = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(json["action"], "publish");
        assert_eq!(json["content"], "Hello LinkedIn");
        assert_eq!(json["accessToken"], "tok_123");
        assert_eq!(json.as_object().expect("object").len(), 4);
    }

    #[test]
    fn payload_timestamp_is_rfc3339() {
        let payload = PublishPayload::new("content", "tok");
        let json = serde_json::to_value(&payload).expect("serialize");

        let timestamp = json["timestamp"].as_str().expect("timestamp string");
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
