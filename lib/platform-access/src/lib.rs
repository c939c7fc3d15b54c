//! Platform access for the PDF remediation portal.
//!
//! This crate provides:
//! - User records keyed by OIDC subject and issuer (`User`)
//! - Server-side sessions (`Session`, `SessionId`)
//! - OIDC provider configuration (`OidcConfig`) and extracted claims (`OidcClaims`)
//! - Authentication error types
//!
//! Anyone the identity provider authenticates may use the portal; there is no
//! group or role gate.
//!
//! # Example
//!
//! ```
//! use pdf_remediation_platform_access::{OidcClaims, Session, SessionId, User};
//! use chrono::Duration;
//!
//! let claims = OidcClaims::new(
//!     "jdoe".to_string(),
//!     "https://login.example.edu/".to_string(),
//! )
//! .with_email(Some("jdoe@example.edu".to_string()));
//!
//! let mut user = User::new(claims.subject.clone(), claims.issuer.clone());
//! user.apply_claims(&claims);
//!
//! let session = Session::new(
//!     SessionId::new("01HZX3J9Q2V8K7T6R5P4N3M2L1".to_string()),
//!     user.id(),
//!     Duration::hours(8),
//! );
//!
//! assert!(session.ensure_active().is_ok());
//! assert_eq!(user.email(), Some("jdoe@example.edu"));
//! ```

pub mod auth;
pub mod error;
pub mod oidc;
pub mod session;
pub mod user;

// Re-export main types at crate root
pub use auth::{AuthenticatedUser, OidcClaims};
pub use error::AuthenticationError;
pub use oidc::{OidcConfig, OidcConfigBuilder};
pub use session::{Session, SessionId};
pub use user::User;
