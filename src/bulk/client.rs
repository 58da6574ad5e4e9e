//! Bulk request client

use super::types::{BulkRequest, BulkResult, MAX_BULK_REQUESTS};
use crate::decode::decode_json;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::record::{AddRecordParams, DeleteRecordsParams, UpdateRecordParams};
use crate::types::Method;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Sends several write requests as one transactional call
#[derive(Clone)]
pub struct BulkClient {
    transport: Arc<dyn Transport>,
}

impl BulkClient {
    /// Create a bulk client over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a sub-request for an endpoint name such as `record`.
    ///
    /// The API path is resolved by the transport, so guest-space clients
    /// reference guest-space paths.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        payload: &impl Serialize,
    ) -> Result<BulkRequest> {
        Ok(BulkRequest::new(
            method,
            self.transport.api_path(endpoint),
            serde_json::to_value(payload)?,
        ))
    }

    /// Start collecting record writes for one bulk call
    pub fn builder(&self) -> BulkRequestBuilder {
        BulkRequestBuilder {
            client: self.clone(),
            requests: Vec::new(),
            error: None,
        }
    }

    /// Send 1 to 20 sub-requests. The server applies all or none of them.
    pub async fn send(&self, requests: Vec<BulkRequest>) -> Result<BulkResult> {
        if requests.is_empty() {
            return Err(Error::validation("bulk request needs at least one request"));
        }
        if requests.len() > MAX_BULK_REQUESTS {
            return Err(Error::validation(format!(
                "too many bulk requests: {} (maximum {MAX_BULK_REQUESTS})",
                requests.len()
            )));
        }

        debug!(requests = requests.len(), "sending bulk request");
        let body = json!({ "requests": requests });
        let bytes = self
            .transport
            .send(Method::POST, "bulkRequest", Some(body))
            .await?;
        decode_json(&bytes)
    }
}

/// Chains record writes into sub-requests.
///
/// Each write is checked the way the record client checks it; the first
/// failure is kept and reported by [`build`](Self::build).
pub struct BulkRequestBuilder {
    client: BulkClient,
    requests: Vec<BulkRequest>,
    error: Option<Error>,
}

impl BulkRequestBuilder {
    fn push(
        mut self,
        method: Method,
        endpoint: &str,
        checked: Result<()>,
        payload: &impl Serialize,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        match checked.and_then(|()| self.client.request(method, endpoint, payload)) {
            Ok(request) => self.requests.push(request),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Add one record
    pub fn add_record(self, params: &AddRecordParams) -> Self {
        self.push(Method::POST, "record", params.validate(), params)
    }

    /// Update one record by id or update key
    pub fn update_record(self, params: &UpdateRecordParams) -> Self {
        self.push(Method::PUT, "record", params.validate(), params)
    }

    /// Delete records
    pub fn delete_records(self, params: &DeleteRecordsParams) -> Self {
        self.push(Method::DELETE, "records", params.validate(), params)
    }

    /// Sub-requests collected so far
    pub fn count(&self) -> usize {
        self.requests.len()
    }

    /// The collected sub-requests, or the first invalid write
    pub fn build(self) -> Result<Vec<BulkRequest>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.requests),
        }
    }

    /// Build and send in one step
    pub async fn send(self) -> Result<BulkResult> {
        let client = self.client.clone();
        client.send(self.build()?).await
    }
}

impl std::fmt::Debug for BulkRequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkRequestBuilder")
            .field("requests", &self.requests)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for BulkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkClient").finish_non_exhaustive()
    }
}
