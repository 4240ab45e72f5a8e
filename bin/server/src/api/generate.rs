//! Generation proxy endpoint.

use axum::{Json, extract::State};
use copper_quill_webhook::GenerationRequest;
use serde::Serialize;
use std::sync::Arc;

use super::ApiError;
use crate::state::AppState;

/// Response body for a successful generation call.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The extracted display text.
    pub content: String,
}

/// `POST /api/generate` - forwards `{topic, style, length}` to the
/// generation webhook and returns the extracted text.
///
/// Style and length are constrained by enum deserialization; only the
/// topic needs an explicit check. One outbound call, no retry.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if request.topic.trim().is_empty() {
        return Err(ApiError::EmptyTopic);
    }

    let content = state
        .generation
        .generate(&request)
        .await
        .map_err(ApiError::Generation)?;

    Ok(Json(GenerateResponse { content }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_content_field() {
        let response = GenerateResponse {
            content: "A generated post".to_string(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json, serde_json::json!({ "content": "A generated post" }));
    }
}
