//! Domain error types for server operations.
//!
//! Variants carry the details needed for logging; `into_server_error` turns
//! them into messages that are safe to show in the browser.

use leptos::server_fn::error::ServerFnError;
use pdf_remediation_platform_access::AuthenticationError;
use std::fmt;

/// Session-related errors.
#[derive(Debug)]
pub enum SessionError {
    /// No session cookie on the request.
    NotAuthenticated,
    /// Session was not found in database.
    NotFound { session_id: String },
    /// Session has expired.
    Expired { session_id: String },
    /// Session refers to a user that no longer exists.
    UserNotFound { user_id: String },
    /// Database error while accessing session.
    DatabaseError { details: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "not authenticated"),
            Self::NotFound { session_id } => {
                write!(f, "session '{}' not found", session_id)
            }
            Self::Expired { session_id } => {
                write!(f, "session '{}' has expired", session_id)
            }
            Self::UserNotFound { user_id } => {
                write!(f, "user '{}' for session not found", user_id)
            }
            Self::DatabaseError { details } => {
                write!(f, "session database error: {}", details)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<AuthenticationError> for SessionError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::SessionExpired { session_id } => Self::Expired { session_id },
            AuthenticationError::UserNotFound { user_id } => Self::UserNotFound {
                user_id: user_id.to_string(),
            },
        }
    }
}

impl SessionError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SessionError::NotAuthenticated => ServerFnError::new("Not authenticated"),
            SessionError::NotFound { .. } => ServerFnError::new("Session not found"),
            SessionError::Expired { .. } => ServerFnError::new("Session expired"),
            SessionError::UserNotFound { .. } => ServerFnError::new("User not found"),
            SessionError::DatabaseError { .. } => ServerFnError::new("Database error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_remediation_core::UserId;

    #[test]
    fn expired_authentication_error_maps_to_expired_session() {
        let err: SessionError = AuthenticationError::SessionExpired {
            session_id: "sess_1".to_string(),
        }
        .into();

        assert!(matches!(err, SessionError::Expired { ref session_id } if session_id == "sess_1"));
    }

    #[test]
    fn missing_user_maps_with_id() {
        let user_id = UserId::new();
        let err: SessionError = AuthenticationError::UserNotFound { user_id }.into();

        assert!(err.to_string().contains(&user_id.to_string()));
    }

    #[test]
    fn every_authentication_error_is_a_signed_out_session() {
        let errors = [
            AuthenticationError::SessionExpired {
                session_id: "sess_1".to_string(),
            },
            AuthenticationError::UserNotFound {
                user_id: UserId::new(),
            },
        ];

        for err in errors {
            let mapped: SessionError = err.into();
            assert!(!matches!(mapped, SessionError::DatabaseError { .. }));
        }
    }

    #[test]
    fn server_error_hides_database_details() {
        let err = SessionError::DatabaseError {
            details: "connection refused to 10.0.0.5".to_string(),
        };

        let message = err.into_server_error().to_string();
        assert!(message.contains("Database error"));
        assert!(!message.contains("10.0.0.5"));
    }
}
