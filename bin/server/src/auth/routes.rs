//! Authentication routes for login, callback, and logout.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Duration as ChronoDuration;
use pdf_remediation_platform_access::{Session, SessionId};
use serde::Deserialize;
use std::sync::Arc;
use time::Duration as TimeDuration;

use super::{
    AUTH_STATE_COOKIE, AppState, SESSION_COOKIE,
    db::{SessionRepository, UserRepository, generate_session_id},
    oidc::AuthState,
};
use crate::config::SessionConfig;

/// Where the browser lands after sign-in and sign-out. The landing page
/// forwards signed-in users to the main route.
const HOME_PATH: &str = "/";

/// How long the user has to finish signing in at the provider.
const AUTH_STATE_MAX_AGE: TimeDuration = TimeDuration::minutes(10);

/// Query parameters for the OIDC callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: String,
    state: String,
}

/// Starts the OIDC flow by redirecting to the identity provider.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthError> {
    let (auth_url, auth_state) = state.oidc_client.authorization_url();

    let auth_state_json =
        serde_json::to_string(&auth_state).map_err(|e| AuthError::Internal(e.to_string()))?;

    let cookie = Cookie::build((AUTH_STATE_COOKIE, auth_state_json))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(AUTH_STATE_MAX_AGE);

    tracing::debug!("Redirecting to OIDC provider");

    Ok((jar.add(cookie), Redirect::to(&auth_url)))
}

/// Handles the provider's redirect back after the user authenticates.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthError> {
    let auth_state = validate_callback_state(
        jar.get(AUTH_STATE_COOKIE).map(|c| c.value()),
        &query.state,
    )?;

    let token_result = state
        .oidc_client
        .exchange_code(&query.code, &auth_state)
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let user = UserRepository::new(state.db_pool.clone())
        .upsert_from_claims(&token_result.claims)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

    let session_duration = state.session_config.duration_minutes;
    let session = Session::with_tokens(
        generate_session_id(),
        user.id(),
        ChronoDuration::minutes(session_duration),
        token_result.access_token,
        token_result.refresh_token,
    );

    SessionRepository::new(state.db_pool.clone())
        .create(&session)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

    tracing::info!(user_id = %user.id(), "User signed in");

    let jar = jar
        .add(session_cookie(session.id(), &state.session_config))
        .add(removal_cookie(AUTH_STATE_COOKIE));

    Ok((jar, Redirect::to(HOME_PATH)))
}

/// Signs the user out by deleting their session.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(session_cookie) = jar.get(SESSION_COOKIE) {
        let session_id = SessionId::new(session_cookie.value().to_string());

        if let Err(e) = SessionRepository::new(state.db_pool.clone())
            .delete(&session_id)
            .await
        {
            tracing::warn!(error = %e, "Failed to delete session on logout");
        }
    }

    (jar.add(removal_cookie(SESSION_COOKIE)), Redirect::to(HOME_PATH))
}

/// Checks the callback's `state` parameter against the stored auth state.
fn validate_callback_state(
    cookie_value: Option<&str>,
    query_state: &str,
) -> Result<AuthState, AuthError> {
    let raw = cookie_value.ok_or(AuthError::MissingAuthState)?;
    let auth_state: AuthState =
        serde_json::from_str(raw).map_err(|_| AuthError::InvalidAuthState)?;

    if query_state != auth_state.csrf_token {
        return Err(AuthError::CsrfMismatch);
    }

    Ok(auth_state)
}

fn session_cookie(id: &SessionId, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.as_str().to_string()))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(config.duration_minutes))
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(TimeDuration::ZERO)
        .build()
}

/// Authentication errors.
#[derive(Debug)]
pub enum AuthError {
    MissingAuthState,
    InvalidAuthState,
    CsrfMismatch,
    TokenExchange(String),
    Database(String),
    Internal(String),
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
            Self::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}
