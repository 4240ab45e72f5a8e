//! Publish proxy endpoint.
//!
//! Same-origin intermediary in front of the publish webhook, so the
//! webhook URL and token handling stay off the browser.

use axum::{Json, extract::State};
use copper_quill_platform_access::Session;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ApiError;
use crate::auth::OptionalAuth;
use crate::state::AppState;

/// Request body for the publish endpoint.
///
/// The access token is optional in the body: the original client omits
/// it, so the proxy falls back to the caller's authenticated session.
#[derive(Debug, Deserialize)]
pub struct PublishBody {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
}

/// Response body for a successful publish call.
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: String,
    /// Raw response text from the publish webhook.
    pub response: String,
}

/// `POST /api/publish` - validates content and token, then forwards both
/// to the publish webhook.
///
/// Validation order matters: blank content is a 400 before the token is
/// even looked at, and only when neither the body nor the session holds
/// a token does the 401 fire.
pub async fn publish(
    State(state): State<Arc<AppState>>,
    OptionalAuth(session): OptionalAuth,
    Json(body): Json<PublishBody>,
) -> Result<Json<PublishResponse>, ApiError> {
    let content = body.content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ApiError::EmptyContent);
    }

    let access_token = resolve_access_token(body.access_token.as_deref(), session.as_ref())
        .ok_or(ApiError::MissingAccessToken)?;

    let response = state
        .publisher
        .publish(&content, &access_token)
        .await
        .map_err(ApiError::Publish)?;

    Ok(Json(PublishResponse {
        success: true,
        message: "Content sent to LinkedIn workflow".to_string(),
        response,
    }))
}

/// Picks the access token for the outbound call.
///
/// A non-empty token in the request body wins; otherwise the token is
/// read server-side from the authenticated session.
fn resolve_access_token(body_token: Option<&str>, session: Option<&Session>) -> Option<String> {
    match body_token {
        Some(token) if !token.trim().is_empty() => Some(token.to_string()),
        _ => session.map(|s| s.access_token().to_string()),
    }
}
