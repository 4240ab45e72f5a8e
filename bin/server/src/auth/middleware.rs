//! Authentication extractors for Axum.

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use copper_quill_platform_access::{Session, SessionId, SessionStore};
use std::sync::Arc;

use crate::state::AppState;

/// Session cookie name.
const SESSION_COOKIE: &str = "session";

/// Extractor for requiring an authenticated session.
///
/// API callers without a valid session receive a 401 JSON error.
pub struct RequireAuth(pub Session);

impl<S> FromRequestParts<S> for RequireAuth
where
    Arc<AppState>: FromRef<S>,
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);
        let jar = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthRejection::InternalError)?;

        // Get session ID from cookie
        let session_cookie = jar
            .get(SESSION_COOKIE)
            .ok_or(AuthRejection::NotAuthenticated)?;

        let session_id = SessionId::new(session_cookie.value().to_string());

        // Look up session in the store
        let session = app_state
            .sessions
            .find(&session_id)
            .await
            .map_err(|_| AuthRejection::InternalError)?
            .ok_or(AuthRejection::NotAuthenticated)?;

        // Check if session is expired
        if session.is_expired() {
            // Delete the expired session
            let _ = app_state.sessions.delete(&session_id).await;
            return Err(AuthRejection::SessionExpired);
        }

        Ok(RequireAuth(session))
    }
}

/// Extractor for optionally getting the authenticated session.
///
/// Returns None if the caller is not authenticated.
pub struct OptionalAuth(pub Option<Session>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    Arc<AppState>: FromRef<S>,
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match RequireAuth::from_request_parts(parts, state).await {
            Ok(RequireAuth(session)) => Ok(OptionalAuth(Some(session))),
            Err(_) => Ok(OptionalAuth(None)),
        }
    }
}

/// Rejection type for authentication extractors.
#[derive(Debug)]
pub enum AuthRejection {
    NotAuthenticated,
    SessionExpired,
    InternalError,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Not authenticated"),
            Self::SessionExpired => (StatusCode::UNAUTHORIZED, "Session expired"),
            Self::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
