//! Webhook call errors.

use std::fmt;

/// Errors from outbound webhook calls.
///
/// Upstream detail stays server-side: callers map these to the generic
/// connectivity messages shown to the end user, and the detail is only
/// logged.
#[derive(Debug)]
pub enum WebhookError {
    /// The outbound HTTP client could not be constructed.
    Configuration { details: String },
    /// The request never completed (connect failure, timeout, body read).
    ConnectionFailed { reason: String },
    /// The webhook answered with a non-success HTTP status.
    UpstreamStatus { status: u16 },
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { details } => {
                write!(f, "webhook client configuration error: {details}")
            }
            Self::ConnectionFailed { reason } => {
                write!(f, "webhook request failed: {reason}")
            }
            Self::UpstreamStatus { status } => {
                write!(f, "webhook returned HTTP {status}")
            }
        }
    }
}

impl std::error::Error for WebhookError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_display() {
        let err = WebhookError::UpstreamStatus { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn connection_failed_display() {
        let err = WebhookError::ConnectionFailed {
            reason: "timed out".to_string(),
        };
        assert!(err.to_string().contains("timed out"));
    }
}
