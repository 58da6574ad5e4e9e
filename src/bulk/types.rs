//! Bulk request types

use crate::types::{JsonValue, Method};
use serde::{Deserialize, Serialize};

/// Maximum sub-requests in one bulk call
pub const MAX_BULK_REQUESTS: usize = 20;

/// One sub-request of a bulk call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkRequest {
    /// HTTP method of the sub-request
    pub method: Method,
    /// API path, e.g. `/k/v1/record.json`
    pub api: String,
    /// Request body
    pub payload: JsonValue,
}

impl BulkRequest {
    /// Create a sub-request from an already resolved API path
    pub fn new(method: Method, api: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            method,
            api: api.into(),
            payload,
        }
    }
}

/// Responses of a bulk call, one per sub-request in order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BulkResult {
    /// Raw sub-request responses
    pub results: Vec<JsonValue>,
}
