//! Authenticator implementation
//!
//! Handles applying authentication headers to requests.

use super::types::AuthConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::RequestBuilder;

/// Header carrying app API tokens
pub const API_TOKEN_HEADER: &str = "X-Cybozu-API-Token";

/// Header carrying base64 `username:password`
pub const PASSWORD_HEADER: &str = "X-Cybozu-Authorization";

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The configuration this authenticator applies
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Header name/value pairs for the configured scheme
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match &self.config {
            AuthConfig::None => Vec::new(),
            AuthConfig::ApiToken { tokens } => {
                vec![(API_TOKEN_HEADER, tokens.join(","))]
            }
            AuthConfig::Password { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                vec![(PASSWORD_HEADER, encoded)]
            }
            AuthConfig::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                vec![("Authorization", format!("Basic {encoded}"))]
            }
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        self.headers()
            .into_iter()
            .fold(req, |req, (name, value)| req.header(name, value))
    }
}
