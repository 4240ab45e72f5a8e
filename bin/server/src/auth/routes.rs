//! Authentication routes for login, callback, logout, and session.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::Duration as ChronoDuration;
use copper_quill_platform_access::{Session, SessionId, SessionStore, SessionView};
use serde::Deserialize;
use std::sync::Arc;
use time::Duration as TimeDuration;

use super::{middleware::RequireAuth, oidc::AuthState, store::generate_session_id};
use crate::state::AppState;

/// Session cookie name.
const SESSION_COOKIE: &str = "session";

/// Auth state cookie name (for CSRF protection during the OIDC flow).
const AUTH_STATE_COOKIE: &str = "auth_state";

/// Query parameters for the OIDC callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: String,
    state: String,
}

/// Initiates the OIDC login flow by redirecting to the identity provider.
pub async fn login(State(state): State<Arc<AppState>>, jar: PrivateCookieJar) -> impl IntoResponse {
    let (auth_url, auth_state) = state.oidc_client.authorization_url();

    // Store the auth state in an encrypted cookie for validation on callback
    let auth_state_json = serde_json::to_string(&AuthStateData {
        csrf_token: auth_state.csrf_token,
        pkce_verifier: auth_state.pkce_verifier,
        nonce: auth_state.nonce,
    })
    .expect("serialize auth state");

    let cookie = Cookie::build((AUTH_STATE_COOKIE, auth_state_json))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(10));

    (jar.add(cookie), Redirect::to(&auth_url))
}

/// Handles the OIDC callback after the user authenticates with the
/// identity provider.
///
/// This is the one turn where the provider account material is present:
/// the access token issued by the exchange is copied into the session
/// here, and every later read goes through the session store.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, AuthError> {
    // Retrieve and validate auth state from cookie
    let auth_state_cookie = jar
        .get(AUTH_STATE_COOKIE)
        .ok_or(AuthError::MissingAuthState)?;

    let auth_state_data: AuthStateData =
        serde_json::from_str(auth_state_cookie.value()).map_err(|_| AuthError::InvalidAuthState)?;

    // Validate CSRF token
    if query.state != auth_state_data.csrf_token {
        return Err(AuthError::CsrfMismatch);
    }

    let auth_state = AuthState {
        csrf_token: auth_state_data.csrf_token,
        pkce_verifier: auth_state_data.pkce_verifier,
        nonce: auth_state_data.nonce,
    };

    // Exchange the authorization code for tokens. A failed exchange
    // aborts sign-in: no session is created.
    let token_result = state
        .oidc_client
        .exchange_code(&query.code, &auth_state)
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    // Create the session carrying identity and the provider token
    let session_id = generate_session_id();
    let session_duration = state.session_config.duration_minutes;
    let session = Session::new(
        session_id.clone(),
        token_result.claims.into_profile(),
        ChronoDuration::minutes(session_duration),
        token_result.access_token,
        token_result.refresh_token,
    );

    state
        .sessions
        .create(session)
        .await
        .map_err(|e| AuthError::Store(e.to_string()))?;

    // Set session cookie
    let session_cookie = Cookie::build((SESSION_COOKIE, session_id.as_str().to_string()))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(session_duration));

    // Remove auth state cookie
    let jar = jar
        .add(session_cookie)
        .remove(Cookie::build((AUTH_STATE_COOKIE, "")).path("/").build());

    tracing::info!(session_id = %session_id, "Sign-in successful");

    Ok((jar, Redirect::to(&state.session_config.login_redirect)))
}

/// Logs out the user by deleting their session.
pub async fn logout(State(state): State<Arc<AppState>>, jar: PrivateCookieJar) -> impl IntoResponse {
    if let Some(session_cookie) = jar.get(SESSION_COOKIE) {
        let session_id = SessionId::new(session_cookie.value().to_string());
        if let Err(e) = state.sessions.delete(&session_id).await {
            tracing::warn!(error = %e, "Session deletion failed during logout");
        }
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());

    (jar, Redirect::to(&state.session_config.logout_redirect))
}

/// Returns the client-facing session object for the signed-in caller.
///
/// The access token is copied onto the view so client code can read it.
pub async fn session(RequireAuth(session): RequireAuth) -> Json<SessionView> {
    Json(session.view())
}

/// Serializable auth state for cookie storage.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct AuthStateData {
    csrf_token: String,
    pkce_verifier: String,
    nonce: String,
}

/// Authentication errors.
#[derive(Debug)]
pub enum AuthError {
    MissingAuthState,
    InvalidAuthState,
    CsrfMismatch,
    TokenExchange(String),
    Store(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthState => (StatusCode::BAD_REQUEST, "Missing auth state"),
            Self::InvalidAuthState => (StatusCode::BAD_REQUEST, "Invalid auth state"),
            Self::CsrfMismatch => (StatusCode::BAD_REQUEST, "CSRF token mismatch"),
            Self::TokenExchange(msg) => {
                tracing::error!("Token exchange failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed")
            }
            Self::Store(msg) => {
                tracing::error!("Session store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}
