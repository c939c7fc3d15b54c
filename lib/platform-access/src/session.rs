//! Server-side sessions for signed-in users.
//!
//! A session is created after a successful OIDC callback and referenced by an
//! opaque ID stored in the browser's `session` cookie.

use chrono::{DateTime, Duration, Utc};
use pdf_remediation_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::AuthenticationError;

/// Unique identifier for a session.
///
/// Session IDs are opaque strings generated during session creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new session ID from a string.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the session ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user_id: UserId,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    /// OIDC access token, kept for calls made on the user's behalf.
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Session {
    /// Creates a new session for the given user, valid for `duration`.
    #[must_use]
    pub fn new(id: SessionId, user_id: UserId, duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            created_at: now,
            expires_at: now + duration,
            access_token: None,
            refresh_token: None,
        }
    }

    /// Creates a session carrying the tokens returned by the provider.
    #[must_use]
    pub fn with_tokens(
        id: SessionId,
        user_id: UserId,
        duration: Duration,
        access_token: String,
        refresh_token: Option<String>,
    ) -> Self {
        let mut session = Self::new(id, user_id, duration);
        session.access_token = Some(access_token);
        session.refresh_token = refresh_token;
        session
    }

    /// Rebuilds a session from stored fields.
    #[must_use]
    pub fn with_all_fields(
        id: SessionId,
        user_id: UserId,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        access_token: Option<String>,
        refresh_token: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            created_at,
            expires_at,
            access_token,
            refresh_token,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns true if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Fails with `SessionExpired` once the expiry time has passed.
    pub fn ensure_active(&self) -> Result<(), AuthenticationError> {
        if self.is_expired() {
            return Err(AuthenticationError::SessionExpired {
                session_id: self.id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session_id() -> SessionId {
        SessionId::new("sess_test_123".to_string())
    }

    #[test]
    fn session_id_conversions() {
        let from_string: SessionId = "abc".to_string().into();
        let from_str: SessionId = "abc".into();
        assert_eq!(from_string, from_str);
        assert_eq!(from_str.as_str(), "abc");
        assert_eq!(from_str.to_string(), "abc");
    }

    #[test]
    fn new_session_has_correct_fields() {
        let user_id = UserId::new();

        let before = Utc::now();
        let session = Session::new(test_session_id(), user_id, Duration::hours(1));
        let after = Utc::now();

        assert_eq!(session.id(), &test_session_id());
        assert_eq!(session.user_id(), user_id);
        assert!(session.created_at() >= before);
        assert!(session.created_at() <= after);
        assert_eq!(
            session.expires_at() - session.created_at(),
            Duration::hours(1)
        );
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
    }

    #[test]
    fn session_with_tokens() {
        let session = Session::with_tokens(
            test_session_id(),
            UserId::new(),
            Duration::hours(1),
            "access".to_string(),
            Some("refresh".to_string()),
        );

        assert_eq!(session.access_token(), Some("access"));
        assert_eq!(session.refresh_token(), Some("refresh"));
    }

    #[test]
    fn expired_session_fails_ensure_active() {
        let session = Session::new(test_session_id(), UserId::new(), Duration::seconds(-1));

        assert!(session.is_expired());
        assert_eq!(
            session.ensure_active(),
            Err(AuthenticationError::SessionExpired {
                session_id: "sess_test_123".to_string(),
            })
        );
    }

    #[test]
    fn live_session_passes_ensure_active() {
        let session = Session::new(test_session_id(), UserId::new(), Duration::hours(1));

        assert!(!session.is_expired());
        assert!(session.ensure_active().is_ok());
    }

    #[test]
    fn with_all_fields_preserves_values() {
        let user_id = UserId::new();
        let created = Utc::now() - Duration::hours(2);
        let expires = created + Duration::hours(1);

        let session = Session::with_all_fields(
            test_session_id(),
            user_id,
            created,
            expires,
            None,
            None,
        );

        assert_eq!(session.created_at(), created);
        assert_eq!(session.expires_at(), expires);
        assert!(session.is_expired());
    }
}
