//! Authentication results shared between the OIDC flow and the web layer.

use crate::session::Session;
use crate::user::User;
use pdf_remediation_core::UserId;

/// A validated session together with the user it belongs to.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    session: Session,
    user: User,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(session: Session, user: User) -> Self {
        Self { session, user }
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.session.user_id()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Name to show in the UI: display name, then email, then a generic label.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.user
            .display_name()
            .or_else(|| self.user.email())
            .unwrap_or("User")
            .to_string()
    }
}

/// Claims extracted from a verified OIDC ID token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcClaims {
    /// The subject claim (unique user identifier from the provider).
    pub subject: String,
    /// The issuer URL.
    pub issuer: String,
    pub email: Option<String>,
    /// From `name`, falling back to `preferred_username`.
    pub display_name: Option<String>,
}

impl OidcClaims {
    #[must_use]
    pub fn new(subject: String, issuer: String) -> Self {
        Self {
            subject,
            issuer,
            email: None,
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }
}
