//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication (session cookies handled elsewhere)
    #[default]
    None,

    /// One or more app API tokens
    ApiToken {
        /// Tokens, sent comma-joined in a single header
        tokens: Vec<String>,
    },

    /// Login name and password
    Password {
        /// Login name
        username: String,
        /// Password
        password: String,
    },

    /// HTTP Basic authentication in front of the platform
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Create API token auth from a single token
    pub fn api_token(token: impl Into<String>) -> Self {
        Self::ApiToken {
            tokens: vec![token.into()],
        }
    }

    /// Create password auth
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check whether any credentials are configured
    pub fn is_configured(&self) -> bool {
        match self {
            AuthConfig::None => false,
            AuthConfig::ApiToken { tokens } => tokens.iter().any(|t| !t.is_empty()),
            AuthConfig::Password { username, .. } | AuthConfig::Basic { username, .. } => {
                !username.is_empty()
            }
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_auth_config_is_configured() {
        assert!(AuthConfig::api_token("t").is_configured());
        assert!(!AuthConfig::ApiToken { tokens: vec![] }.is_configured());
        assert!(AuthConfig::password("user", "pass").is_configured());
    }

    #[test]
    fn test_auth_config_yaml() {
        let config: AuthConfig =
            serde_yaml::from_str("type: api_token\ntokens: [a, b]\n").unwrap();
        assert_eq!(
            config,
            AuthConfig::ApiToken {
                tokens: vec!["a".to_string(), "b".to_string()]
            }
        );
    }
}
