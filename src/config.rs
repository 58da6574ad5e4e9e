//! Client configuration
//!
//! Connection settings can come from a YAML (or JSON) file, from `KINTONE_*`
//! environment variables, or both; environment values win.
//!
//! ```yaml
//! base_url: https://example.cybozu.com
//! guest_space_id: 12
//! timeout_secs: 60
//! auth:
//!   type: api_token
//!   tokens: [abc123, def456]
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the base URL
pub const ENV_BASE_URL: &str = "KINTONE_BASE_URL";
/// Environment variable holding comma-separated API tokens
pub const ENV_API_TOKEN: &str = "KINTONE_API_TOKEN";
/// Environment variable holding the login name
pub const ENV_USERNAME: &str = "KINTONE_USERNAME";
/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "KINTONE_PASSWORD";
/// Environment variable holding the guest space id
pub const ENV_GUEST_SPACE_ID: &str = "KINTONE_GUEST_SPACE_ID";

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for a [`crate::Client`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the tenant
    #[serde(default)]
    pub base_url: String,

    /// Guest space id, when the apps live in a guest space
    #[serde(default)]
    pub guest_space_id: Option<u64>,

    /// Credentials
    #[serde(default)]
    pub auth: AuthConfig,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            guest_space_id: None,
            auth: AuthConfig::None,
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Parse a YAML or JSON document
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build a config from environment variables alone
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Overlay the process environment
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`, keyed by the `KINTONE_*` variable names.
    ///
    /// Empty values are ignored. An API token takes precedence over a
    /// username and password.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).none_if_empty();

        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }

        if let Some(id) = get(ENV_GUEST_SPACE_ID) {
            let id = id
                .parse::<u64>()
                .map_err(|_| Error::config(format!("{ENV_GUEST_SPACE_ID} is not a number: {id}")))?;
            self.guest_space_id = Some(id);
        }

        if let Some(tokens) = get(ENV_API_TOKEN) {
            self.auth = AuthConfig::ApiToken {
                tokens: tokens
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect(),
            };
        } else if let Some(username) = get(ENV_USERNAME) {
            self.auth = AuthConfig::Password {
                username,
                password: get(ENV_PASSWORD).unwrap_or_default(),
            };
        }

        Ok(self)
    }

    /// Check that a client can be built from this config
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        match &self.auth {
            AuthConfig::None => Err(Error::missing_field("auth")),
            AuthConfig::ApiToken { .. } if !self.auth.is_configured() => {
                Err(Error::missing_field("auth.tokens"))
            }
            AuthConfig::Password { username, password }
            | AuthConfig::Basic { username, password } => {
                if username.is_empty() {
                    Err(Error::missing_field("auth.username"))
                } else if password.is_empty() {
                    Err(Error::missing_field("auth.password"))
                } else {
                    Ok(())
                }
            }
            AuthConfig::ApiToken { .. } => Ok(()),
        }
    }

    /// Validate and convert into transport settings
    pub fn into_http_config(self) -> Result<HttpClientConfig> {
        self.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.trim_end_matches('/'))
            .timeout(Duration::from_secs(self.timeout_secs))
            .auth(self.auth);
        if let Some(id) = self.guest_space_id {
            builder = builder.guest_space(id);
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }
        Ok(builder.build())
    }
}

/// Load a config file and overlay the environment
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        read => read.with_context(|| format!("failed to read config file '{}'", path.display()))?,
    };
    ClientConfig::parse(&content)
        .with_context(|| format!("invalid config file '{}'", path.display()))?
        .with_env()
}
