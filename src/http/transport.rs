//! The transport seam between API clients and the network

use crate::error::Result;
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

/// Issues one HTTP call against an endpoint name such as `records/cursor`.
///
/// Returns the raw response body on success. Any non-success status becomes
/// an error carrying the server's code, message and id verbatim.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request with an optional JSON body
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Bytes>;

    /// Upload `content` as the multipart form field `file`
    async fn upload(&self, endpoint: &str, file_name: &str, content: Bytes) -> Result<Bytes>;

    /// GET with query-string parameters and no JSON body; returns the raw body
    async fn download(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Bytes>;

    /// API path for an endpoint, as referenced inside bulk requests
    fn api_path(&self, endpoint: &str) -> String {
        format!("/k/v1/{endpoint}.json")
    }
}
