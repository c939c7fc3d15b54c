//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables with `__`
//! separating nested keys (`OIDC__CLIENT_ID`, `SESSION__SECURE_COOKIES`).
//!
//! See [`OidcConfig`](pdf_remediation_platform_access::OidcConfig) for
//! the identity provider settings.

use pdf_remediation_platform_access::OidcConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// PostgreSQL database connection URL.
    pub database_url: String,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// OIDC authentication configuration.
    pub oidc: OidcConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session duration in minutes. Roughly one working day; there is no
    /// token refresh, so users sign in again once it runs out.
    #[serde(default = "default_session_duration_minutes")]
    pub duration_minutes: i64,

    /// Interval between session cleanup runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true for production safety; set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

/// Longest session lifetime accepted from configuration: one week.
pub const MAX_SESSION_DURATION_MINUTES: i64 = 7 * 24 * 60;

fn default_session_duration_minutes() -> i64 {
    480
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

fn default_secure_cookies() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_session_duration_minutes(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::default())
    }

    fn from_source(env: config::Environment) -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(env.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.session.validate()?;
        Ok(config)
    }
}

impl SessionConfig {
    /// Rejects values the session store and cleanup timer cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the offending setting.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(1..=MAX_SESSION_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(config::ConfigError::Message(format!(
                "session.duration_minutes must be between 1 and {}, got {}",
                MAX_SESSION_DURATION_MINUTES, self.duration_minutes
            )));
        }
        if self.cleanup_interval_seconds == 0 {
            return Err(config::ConfigError::Message(
                "session.cleanup_interval_seconds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default().source(Some(source))
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DATABASE_URL", "postgres://localhost/pdf"),
        ("OIDC__ISSUER_URL", "https://login.example.edu"),
        ("OIDC__CLIENT_ID", "portal"),
        ("OIDC__CLIENT_SECRET", "secret"),
        ("OIDC__REDIRECT_URI", "https://pdf.example.edu/auth/callback"),
    ];

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.duration_minutes, 480);
        assert_eq!(config.cleanup_interval_seconds, 300);
        assert!(config.secure_cookies);
    }

    #[test]
    fn loads_nested_values_from_environment() {
        let config = ServerConfig::from_source(env(REQUIRED)).expect("config");

        assert_eq!(config.database_url, "postgres://localhost/pdf");
        assert_eq!(config.oidc.client_id(), "portal");
        assert_eq!(config.oidc.scopes(), vec!["openid", "email", "profile"]);
        assert_eq!(config.session.duration_minutes, 480);
    }

    #[test]
    fn session_overrides_are_parsed() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SESSION__DURATION_MINUTES", "60"));
        vars.push(("SESSION__SECURE_COOKIES", "false"));

        let config = ServerConfig::from_source(env(&vars)).expect("config");

        assert_eq!(config.session.duration_minutes, 60);
        assert!(!config.session.secure_cookies);
        assert_eq!(config.session.cleanup_interval_seconds, 300);
    }

    #[test]
    fn default_session_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_cleanup_interval_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SESSION__CLEANUP_INTERVAL_SECONDS", "0"));

        let err = ServerConfig::from_source(env(&vars)).expect_err("zero interval");
        assert!(err.to_string().contains("cleanup_interval_seconds"));
    }

    #[test]
    fn out_of_range_session_duration_is_rejected() {
        for minutes in ["0", "-5", "10081", "9223372036854775807"] {
            let mut vars = REQUIRED.to_vec();
            vars.push(("SESSION__DURATION_MINUTES", minutes));

            let err = ServerConfig::from_source(env(&vars)).expect_err(minutes);
            assert!(err.to_string().contains("duration_minutes"), "{minutes}: {err}");
        }
    }

    #[test]
    fn longest_session_duration_is_accepted() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SESSION__DURATION_MINUTES", "10080"));

        let config = ServerConfig::from_source(env(&vars)).expect("config");
        assert_eq!(config.session.duration_minutes, MAX_SESSION_DURATION_MINUTES);
    }

    #[test]
    fn missing_oidc_settings_fail() {
        let result = ServerConfig::from_source(env(&[("DATABASE_URL", "postgres://localhost/pdf")]));
        assert!(result.is_err());
    }
}
