//! API handlers proxying the two external webhooks.
//!
//! Both proxies follow the same error discipline: validation failures
//! answer synchronously with a specific status and message, upstream
//! failures collapse to a generic connectivity message with the detail
//! only logged, and every error body is structured JSON.

pub mod generate;
pub mod publish;

pub use generate::generate;
pub use publish::publish;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use copper_quill_webhook::WebhookError;

/// Errors from the proxy endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// Generation called with an empty or whitespace-only topic.
    EmptyTopic,
    /// Publish called with empty or missing content.
    EmptyContent,
    /// Publish called with no access token in the body or session.
    MissingAccessToken,
    /// The generation webhook call failed.
    Generation(WebhookError),
    /// The publish webhook call failed.
    Publish(WebhookError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::EmptyTopic => (StatusCode::BAD_REQUEST, "Please enter a topic"),
            Self::EmptyContent => (StatusCode::BAD_REQUEST, "No content provided"),
            Self::MissingAccessToken => (
                StatusCode::UNAUTHORIZED,
                "No access token provided. Please sign in again.",
            ),
            Self::Generation(e) => {
                tracing::error!(error = %e, "Generation webhook call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to connect to backend. Please check your webhook URL.",
                )
            }
            Self::Publish(e) => {
                tracing::error!(error = %e, "Publish webhook call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to publish to LinkedIn. Check your webhook URL.",
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
