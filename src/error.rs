//! Error types for the kintone client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Error code the platform returns for a cursor that no longer exists
pub const CURSOR_NOT_FOUND_CODE: &str = "GAIA_CN01";

/// Maximum number of body bytes kept in a decode error
const BODY_SNIPPET_LIMIT: usize = 1024;

/// Structured error returned by the REST API on a non-success status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiError {
    /// HTTP status code (filled in from the response, not the body)
    #[serde(skip)]
    pub status: u16,
    /// Platform error code (e.g. `CB_VA01`)
    #[serde(default)]
    pub code: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Error id for support requests
    #[serde(default)]
    pub id: String,
    /// Per-field details
    #[serde(default)]
    pub errors: Map<String, Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {} ({})",
            self.status, self.code, self.message, self.id
        )
    }
}

/// The main error type for the kintone client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to serialize request: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Validation Errors (raised before any network call)
    // ============================================================================
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("API error: {0}")]
    Api(ApiError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message} (body: {body})")]
    Decode { message: String, body: String },

    // ============================================================================
    // Control Flow
    // ============================================================================
    #[error("Operation cancelled")]
    Cancelled,

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any request was sent
    Validation,
    /// Network failure or non-success HTTP status
    Transport,
    /// Response payload did not match the expected shape
    Decode,
    /// Aborted by a cancel signal or deadline
    Cancelled,
    /// Configuration, I/O and everything else
    Config,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error, keeping a bounded snippet of the raw body
    pub fn decode(message: impl Into<String>, body: &[u8]) -> Self {
        let end = body.len().min(BODY_SNIPPET_LIMIT);
        Self::Decode {
            message: message.into(),
            body: String::from_utf8_lossy(&body[..end]).into_owned(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Api(_) | Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. } => {
                ErrorKind::Transport
            }
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Cancelled => ErrorKind::Cancelled,
            _ => ErrorKind::Config,
        }
    }

    /// The structured API error, if the server returned one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check whether the server reported the target as already gone
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api(err) => err.status == 404 || err.code == CURSOR_NOT_FOUND_CODE,
            Error::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }
}

/// Result type alias for the kintone client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, code: &str) -> Error {
        Error::Api(ApiError {
            status,
            code: code.to_string(),
            message: "msg".to_string(),
            id: "abc".to_string(),
            errors: Map::new(),
        })
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("base_url");
        assert_eq!(err.to_string(), "Missing required config field: base_url");

        let err = Error::http_status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

        let err = api(400, "CB_VA01");
        assert_eq!(err.to_string(), "API error: [400] [CB_VA01] msg (abc)");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(api(500, "X").kind(), ErrorKind::Transport);
        assert_eq!(Error::http_status(500, "").kind(), ErrorKind::Transport);
        assert_eq!(Error::decode("bad", b"{}").kind(), ErrorKind::Decode);
        assert_eq!(Error::Cancelled.kind(), ErrorKind::Cancelled);
        assert_eq!(Error::config("x").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_is_not_found() {
        assert!(api(404, "GAIA_XX").is_not_found());
        assert!(api(400, CURSOR_NOT_FOUND_CODE).is_not_found());
        assert!(Error::http_status(404, "").is_not_found());
        assert!(!api(400, "CB_VA01").is_not_found());
        assert!(!Error::Cancelled.is_not_found());
    }

    #[test]
    fn test_decode_body_is_truncated() {
        let body = vec![b'a'; 4096];
        match Error::decode("too long", &body) {
            Error::Decode { body, .. } => assert_eq!(body.len(), BODY_SNIPPET_LIMIT),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_api_error_deserialize() {
        let err: ApiError = serde_json::from_str(
            r#"{"code":"GAIA_CN01","id":"x1","message":"gone","errors":{"id":{"messages":["bad"]}}}"#,
        )
        .unwrap();
        assert_eq!(err.status, 0);
        assert_eq!(err.code, "GAIA_CN01");
        assert!(err.errors.contains_key("id"));
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
