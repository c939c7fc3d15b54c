//! Session lookup for server functions.

use crate::auth::SESSION_COOKIE;
use crate::auth::db::{SessionRepository, UserRepository};
use crate::error::SessionError;
use axum::Extension;
use axum_extra::extract::CookieJar;
use pdf_remediation_platform_access::{AuthenticatedUser, AuthenticationError, SessionId};
use sqlx::PgPool;

/// Resolves the request's session cookie to a live session and its user.
///
/// Logs storage failures with context and returns typed errors; callers decide
/// which of them mean "signed out".
pub async fn get_authenticated_user() -> Result<AuthenticatedUser, SessionError> {
    let session_id_str = leptos_axum::extract::<CookieJar>()
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, "Failed to extract cookie jar");
            SessionError::NotAuthenticated
        })?
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(SessionError::NotAuthenticated)?;

    let Extension(pool) = leptos_axum::extract::<Extension<PgPool>>()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database pool missing from request extensions");
            SessionError::DatabaseError {
                details: e.to_string(),
            }
        })?;

    let session_id = SessionId::new(session_id_str.clone());
    let session = SessionRepository::new(pool.clone())
        .find_by_id(&session_id)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                session_id = %session_id_str,
                "Database error looking up session"
            );
            SessionError::DatabaseError {
                details: e.to_string(),
            }
        })?
        .ok_or_else(|| {
            tracing::debug!(session_id = %session_id_str, "Session not found in database");
            SessionError::NotFound {
                session_id: session_id_str.clone(),
            }
        })?;

    session.ensure_active().inspect_err(|_| {
        tracing::debug!(session_id = %session_id_str, "Session expired");
    })?;

    let user = UserRepository::new(pool)
        .find_by_id(session.user_id())
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                user_id = %session.user_id(),
                "Database error loading session user"
            );
            SessionError::DatabaseError {
                details: e.to_string(),
            }
        })?
        .ok_or(AuthenticationError::UserNotFound {
            user_id: session.user_id(),
        })?;

    Ok(AuthenticatedUser::new(session, user))
}
