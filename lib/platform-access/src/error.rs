//! Error types for the platform-access crate.
//!
//! Callers wrap these in a rootcause `Report` and attach their own context as
//! the error moves up toward the web layer.

use pdf_remediation_core::UserId;
use std::fmt;

/// Errors from authentication operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// Session has expired.
    SessionExpired { session_id: String },
    /// Session points at a user record that no longer exists.
    UserNotFound { user_id: UserId },
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionExpired { session_id } => {
                write!(f, "session has expired: {session_id}")
            }
            Self::UserNotFound { user_id } => {
                write!(f, "user not found: {user_id}")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}
