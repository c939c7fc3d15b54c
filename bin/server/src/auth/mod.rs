//! Sign-in for the portal.
//!
//! This module provides:
//! - OIDC authorization-code flow (PKCE) against the institution's provider
//! - Database-backed users and sessions
//! - The `/auth/login`, `/auth/callback` and `/auth/logout` routes
//!
//! The browser only ever holds an opaque session ID; tokens stay server-side.

pub mod db;
pub mod oidc;
pub mod routes;

use crate::config::SessionConfig;
use sqlx::PgPool;

pub use oidc::OidcClient;
pub use routes::{callback, login, logout};

/// Session cookie name.
pub const SESSION_COOKIE: &str = "session";

/// Cookie holding CSRF token, PKCE verifier and nonce during the OIDC flow.
pub const AUTH_STATE_COOKIE: &str = "auth_state";

/// Shared application state.
pub struct AppState {
    pub db_pool: PgPool,
    pub oidc_client: OidcClient,
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(db_pool: PgPool, oidc_client: OidcClient, session_config: SessionConfig) -> Self {
        Self {
            db_pool,
            oidc_client,
            session_config,
        }
    }
}
