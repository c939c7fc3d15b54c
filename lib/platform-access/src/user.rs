//! User domain type.
//!
//! Users are identified by the `(subject, issuer)` pair from their ID token and
//! get an internal `UserId` on first sign-in.

use chrono::{DateTime, Utc};
use pdf_remediation_core::UserId;
use serde::{Deserialize, Serialize};

use crate::auth::OidcClaims;

/// A person who has signed in to the portal at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    /// OIDC subject claim.
    subject: String,
    /// OIDC issuer URL.
    issuer: String,
    email: Option<String>,
    /// From the `name` claim, falling back to `preferred_username`.
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user for a first-time sign-in.
    #[must_use]
    pub fn new(subject: String, issuer: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            subject,
            issuer,
            email: None,
            display_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a user from stored fields.
    #[must_use]
    pub fn with_all_fields(
        id: UserId,
        subject: String,
        issuer: String,
        email: Option<String>,
        display_name: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            subject,
            issuer,
            email,
            display_name,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Refreshes profile fields from the claims of a new sign-in.
    ///
    /// Claims missing from the token clear the stored value, so the record
    /// always mirrors what the provider last reported.
    pub fn apply_claims(&mut self, claims: &OidcClaims) {
        self.email = claims.email.clone();
        self.display_name = claims.display_name.clone();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            "sub_123".to_string(),
            "https://auth.example.com".to_string(),
        )
    }

    #[test]
    fn new_user_has_identity_and_no_profile() {
        let user = test_user();

        assert!(user.id().to_string().starts_with("usr_"));
        assert_eq!(user.subject(), "sub_123");
        assert_eq!(user.issuer(), "https://auth.example.com");
        assert!(user.email().is_none());
        assert!(user.display_name().is_none());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn apply_claims_copies_profile_and_bumps_timestamp() {
        let mut user = test_user();
        let original_updated_at = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(1));

        let claims = OidcClaims::new(user.subject().to_string(), user.issuer().to_string())
            .with_email(Some("alice@example.com".to_string()))
            .with_display_name(Some("Alice".to_string()));
        user.apply_claims(&claims);

        assert_eq!(user.email(), Some("alice@example.com"));
        assert_eq!(user.display_name(), Some("Alice"));
        assert!(user.updated_at() > original_updated_at);
    }

    #[test]
    fn apply_claims_clears_missing_fields() {
        let mut user = test_user();
        user.apply_claims(
            &OidcClaims::new("sub_123".to_string(), "iss".to_string())
                .with_email(Some("old@example.com".to_string())),
        );

        user.apply_claims(&OidcClaims::new("sub_123".to_string(), "iss".to_string()));

        assert!(user.email().is_none());
    }

    #[test]
    fn with_all_fields_preserves_values() {
        let id = UserId::new();
        let created = Utc::now() - chrono::Duration::days(30);
        let updated = Utc::now() - chrono::Duration::days(1);

        let user = User::with_all_fields(
            id,
            "sub_456".to_string(),
            "https://auth.example.com".to_string(),
            Some("alice@example.com".to_string()),
            Some("Alice".to_string()),
            created,
            updated,
        );

        assert_eq!(user.id(), id);
        assert_eq!(user.subject(), "sub_456");
        assert_eq!(user.email(), Some("alice@example.com"));
        assert_eq!(user.display_name(), Some("Alice"));
        assert_eq!(user.created_at(), created);
        assert_eq!(user.updated_at(), updated);
    }
}
