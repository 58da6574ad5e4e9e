//! HTTP client for the REST API
//!
//! Builds endpoint URLs (including guest space paths), applies auth and
//! default headers, and turns non-success responses into structured errors.
//! One call is one round trip: there is no retry or throttling layer.

use super::transport::Transport;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{ApiError, Error, Result};
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the tenant, e.g. `https://example.cybozu.com`
    pub base_url: String,
    /// Guest space id; switches paths to `/k/guest/{id}/v1/...`
    pub guest_space_id: Option<u64>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Authentication
    pub auth: AuthConfig,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            guest_space_id: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("kintone-rest/{}", env!("CARGO_PKG_VERSION")),
            auth: AuthConfig::None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Target a guest space
    pub fn guest_space(mut self, id: u64) -> Self {
        self.config.guest_space_id = Some(id);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set authentication
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// reqwest-backed [`Transport`]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let authenticator = Authenticator::new(config.auth.clone());

        Ok(Self {
            client,
            config,
            authenticator,
        })
    }

    /// Build full URL for an endpoint name such as `records/cursor`
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}{}", self.api_path(endpoint))
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(err)
        }
    }

    /// Start a request with default headers and auth applied
    fn prepare(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method.into(), url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        self.authenticator.apply(req)
    }

    async fn execute(&self, method: Method, url: &str, req: RequestBuilder) -> Result<Bytes> {
        debug!(%method, %url, "sending request");
        let response = req.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if status.is_success() {
            return Ok(bytes);
        }

        debug!(%method, %url, status = status.as_u16(), "request failed");
        Err(error_from_response(status.as_u16(), &bytes))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Bytes> {
        let url = self.build_url(endpoint);
        let mut req = self.prepare(method, &url);

        // The API reads a JSON body on every verb, GET and DELETE included
        if let Some(ref body) = body {
            req = req.json(body);
        }

        self.execute(method, &url, req).await
    }

    async fn upload(&self, endpoint: &str, file_name: &str, content: Bytes) -> Result<Bytes> {
        let url = self.build_url(endpoint);
        let part = Part::bytes(content.to_vec()).file_name(file_name.to_string());
        let req = self
            .prepare(Method::POST, &url)
            .multipart(Form::new().part("file", part));

        self.execute(Method::POST, &url, req).await
    }

    async fn download(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Bytes> {
        let url = self.build_url(endpoint);
        let req = self.prepare(Method::GET, &url).query(query);

        self.execute(Method::GET, &url, req).await
    }

    fn api_path(&self, endpoint: &str) -> String {
        match self.config.guest_space_id {
            Some(space) => format!("/k/guest/{space}/v1/{endpoint}.json"),
            None => format!("/k/v1/{endpoint}.json"),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("guest_space_id", &self.config.guest_space_id)
            .field("has_auth", &self.config.auth.is_configured())
            .finish_non_exhaustive()
    }
}

/// Turn a failed response into a structured error when the body allows it
pub(crate) fn error_from_response(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(mut err) if !err.code.is_empty() || !err.message.is_empty() => {
            err.status = status;
            Error::Api(err)
        }
        _ => Error::http_status(status, String::from_utf8_lossy(body).into_owned()),
    }
}
