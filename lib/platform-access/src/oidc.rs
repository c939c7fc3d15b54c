//! OIDC provider configuration.
//!
//! The portal signs users in against the institution's identity provider
//! using the authorization-code flow with PKCE.

use serde::{Deserialize, Serialize};

/// Connection settings for the OIDC identity provider.
///
/// Fields with defaults can be omitted when loading from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OidcConfig {
    /// Issuer URL used for discovery (e.g. "https://login.example.edu/realms/main").
    issuer_url: String,
    client_id: String,
    client_secret: String,
    /// Callback URL registered with the provider, ending in `/auth/callback`.
    redirect_uri: String,
    /// Comma-separated scopes. Default: "openid,email,profile"
    #[serde(default = "default_scopes")]
    scopes: String,
}

fn default_scopes() -> String {
    "openid,email,profile".to_string()
}

impl OidcConfig {
    /// Creates a configuration with the default scopes.
    #[must_use]
    pub fn new(
        issuer_url: String,
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    ) -> Self {
        Self {
            issuer_url,
            client_id,
            client_secret,
            redirect_uri,
            scopes: default_scopes(),
        }
    }

    /// Creates a configuration builder for more customization.
    #[must_use]
    pub fn builder(
        issuer_url: String,
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    ) -> OidcConfigBuilder {
        OidcConfigBuilder::new(issuer_url, client_id, client_secret, redirect_uri)
    }

    #[must_use]
    pub fn issuer_url(&self) -> &str {
        &self.issuer_url
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Returns the scopes to request, skipping blank entries.
    #[must_use]
    pub fn scopes(&self) -> Vec<&str> {
        self.scopes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Builder for `OidcConfig`.
#[derive(Debug)]
pub struct OidcConfigBuilder {
    issuer_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: Vec<String>,
}

impl OidcConfigBuilder {
    /// Creates a new builder with required fields.
    #[must_use]
    pub fn new(
        issuer_url: String,
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    ) -> Self {
        Self {
            issuer_url,
            client_id,
            client_secret,
            redirect_uri,
            scopes: default_scopes().split(',').map(str::to_string).collect(),
        }
    }

    /// Replaces the scopes to request.
    #[must_use]
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Adds a scope unless it is already requested.
    #[must_use]
    pub fn add_scope(mut self, scope: String) -> Self {
        if !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> OidcConfig {
        OidcConfig {
            issuer_url: self.issuer_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
            redirect_uri: self.redirect_uri,
            scopes: self.scopes.join(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_builder() -> OidcConfigBuilder {
        OidcConfig::builder(
            "https://login.example.edu".to_string(),
            "client-id".to_string(),
            "client-secret".to_string(),
            "https://pdf.example.edu/auth/callback".to_string(),
        )
    }

    #[test]
    fn new_config_requests_default_scopes() {
        let config = OidcConfig::new(
            "https://login.example.edu".to_string(),
            "client-id".to_string(),
            "client-secret".to_string(),
            "https://pdf.example.edu/auth/callback".to_string(),
        );

        assert_eq!(config.issuer_url(), "https://login.example.edu");
        assert_eq!(config.client_id(), "client-id");
        assert_eq!(config.client_secret(), "client-secret");
        assert_eq!(config.redirect_uri(), "https://pdf.example.edu/auth/callback");
        assert_eq!(config.scopes(), vec!["openid", "email", "profile"]);
    }

    #[test]
    fn builder_add_scope_does_not_duplicate() {
        let config = test_builder()
            .add_scope("openid".to_string())
            .add_scope("offline_access".to_string())
            .build();

        assert_eq!(
            config.scopes(),
            vec!["openid", "email", "profile", "offline_access"]
        );
    }

    #[test]
    fn builder_replaces_scopes() {
        let config = test_builder().scopes(vec!["openid".to_string()]).build();

        assert_eq!(config.scopes(), vec!["openid"]);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{
            "issuer_url": "https://login.example.edu",
            "client_id": "portal",
            "client_secret": "secret",
            "redirect_uri": "https://pdf.example.edu/auth/callback"
        }"#;

        let config: OidcConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.client_id(), "portal");
        assert_eq!(config.scopes(), vec!["openid", "email", "profile"]);
    }

    #[test]
    fn scopes_trim_and_skip_blanks() {
        let json = r#"{
            "issuer_url": "https://login.example.edu",
            "client_id": "portal",
            "client_secret": "secret",
            "redirect_uri": "https://pdf.example.edu/auth/callback",
            "scopes": "openid, email,, profile ,"
        }"#;

        let config: OidcConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.scopes(), vec!["openid", "email", "profile"]);
    }
}
