//! OIDC client implementation using the openidconnect crate.

use openidconnect::core::{CoreAuthenticationFlow, CoreClient, CoreProviderMetadata};
use openidconnect::{
    AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointMaybeSet, EndpointNotSet,
    EndpointSet, IssuerUrl, Nonce, OAuth2TokenResponse, PkceCodeChallenge, PkceCodeVerifier,
    RedirectUrl, Scope, TokenResponse,
};
use pdf_remediation_core::Result;
use pdf_remediation_platform_access::{OidcClaims, OidcConfig};

/// `CoreClient` as built from discovered provider metadata.
type DiscoveredClient = CoreClient<
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointMaybeSet,
    EndpointMaybeSet,
>;

/// OIDC client for signing users in.
pub struct OidcClient {
    client: DiscoveredClient,
    http_client: reqwest::Client,
    config: OidcConfig,
}

/// Data needed to complete the OIDC callback.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthState {
    pub csrf_token: String,
    pub pkce_verifier: String,
    pub nonce: String,
}

/// Result of a successful token exchange.
pub struct TokenResult {
    pub claims: OidcClaims,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl OidcClient {
    /// Creates a new OIDC client by discovering the provider metadata.
    pub async fn discover(config: OidcConfig) -> Result<Self, OidcError> {
        let issuer_url = IssuerUrl::new(config.issuer_url().to_string())
            .map_err(|e| OidcError::Configuration(format!("invalid issuer URL: {}", e)))?;

        let redirect_url = RedirectUrl::new(config.redirect_uri().to_string())
            .map_err(|e| OidcError::Configuration(format!("invalid redirect URI: {}", e)))?;

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                OidcError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        let provider_metadata = CoreProviderMetadata::discover_async(issuer_url, &http_client)
            .await
            .map_err(|e| OidcError::Discovery(format!("failed to discover provider: {}", e)))?;

        let client = CoreClient::from_provider_metadata(
            provider_metadata,
            ClientId::new(config.client_id().to_string()),
            Some(ClientSecret::new(config.client_secret().to_string())),
        )
        .set_redirect_uri(redirect_url);

        tracing::info!(issuer = config.issuer_url(), "Discovered OIDC provider");

        Ok(Self {
            client,
            http_client,
            config,
        })
    }

    /// Builds the provider authorization URL with PKCE, CSRF state and nonce.
    pub fn authorization_url(&self) -> (String, AuthState) {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut auth_request = self
            .client
            .authorize_url(
                CoreAuthenticationFlow::AuthorizationCode,
                CsrfToken::new_random,
                Nonce::new_random,
            )
            .set_pkce_challenge(pkce_challenge);

        for scope in self.config.scopes() {
            // openidconnect always sends "openid" itself.
            if scope != "openid" {
                auth_request = auth_request.add_scope(Scope::new(scope.to_string()));
            }
        }

        let (auth_url, csrf_token, nonce) = auth_request.url();

        let state = AuthState {
            csrf_token: csrf_token.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
            nonce: nonce.secret().clone(),
        };

        (auth_url.to_string(), state)
    }

    /// Exchanges the authorization code for tokens and extracts verified claims.
    pub async fn exchange_code(&self, code: &str, state: &AuthState) -> Result<TokenResult, OidcError> {
        let token_response = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .map_err(|e| OidcError::TokenExchange(format!("token endpoint error: {}", e)))?
            .set_pkce_verifier(PkceCodeVerifier::new(state.pkce_verifier.clone()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| OidcError::TokenExchange(format!("token exchange failed: {}", e)))?;

        let id_token = token_response
            .id_token()
            .ok_or_else(|| OidcError::TokenValidation("no ID token in response".to_string()))?;

        let nonce = Nonce::new(state.nonce.clone());
        let claims = id_token
            .claims(&self.client.id_token_verifier(), &nonce)
            .map_err(|e| {
                OidcError::TokenValidation(format!("ID token validation failed: {}", e))
            })?;

        let display_name = claims
            .name()
            .and_then(|n| n.get(None))
            .map(|n| n.as_str().to_string())
            .or_else(|| claims.preferred_username().map(|u| u.as_str().to_string()));

        let oidc_claims = OidcClaims::new(claims.subject().to_string(), claims.issuer().to_string())
            .with_email(claims.email().map(|e| e.as_str().to_string()))
            .with_display_name(display_name);

        Ok(TokenResult {
            claims: oidc_claims,
            access_token: token_response.access_token().secret().clone(),
            refresh_token: token_response.refresh_token().map(|t| t.secret().clone()),
        })
    }
}

/// OIDC-related errors.
#[derive(Debug)]
pub enum OidcError {
    /// Configuration error (invalid URLs, etc.)
    Configuration(String),
    /// Failed to discover provider metadata.
    Discovery(String),
    TokenExchange(String),
    TokenValidation(String),
}

impl std::fmt::Display for OidcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "OIDC configuration error: {}", msg),
            Self::Discovery(msg) => write!(f, "OIDC discovery error: {}", msg),
            Self::TokenExchange(msg) => write!(f, "OIDC token exchange error: {}", msg),
            Self::TokenValidation(msg) => write!(f, "OIDC token validation error: {}", msg),
        }
    }
}

impl std::error::Error for OidcError {}
