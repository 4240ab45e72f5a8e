//! Webhook endpoint configuration.

use serde::Deserialize;

/// Configuration for the two outbound webhooks.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// URL of the content-generation webhook.
    pub generate_url: String,

    /// URL of the publish webhook.
    pub publish_url: String,

    /// Request timeout for outbound webhook calls, in seconds.
    /// Bounds how long a hung webhook can pin a request.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl WebhookConfig {
    /// Returns the configured timeout as a [`std::time::Duration`].
    #[must_use]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_to_thirty_seconds() {
        let json = r#"{
            "generate_url": "https://hooks.example.com/generate",
            "publish_url": "https://hooks.example.com/publish"
        }"#;

        let config: WebhookConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.timeout(), std::time::Duration::from_secs(30));
    }

    #[test]
    fn timeout_is_configurable() {
        let json = r#"{
            "generate_url": "https://hooks.example.com/generate",
            "publish_url": "https://hooks.example.com/publish",
            "timeout_seconds": 5
        }"#;

        let config: WebhookConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.timeout(), std::time::Duration::from_secs(5));
    }
}
