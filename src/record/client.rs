//! Record API client
//!
//! Typed wrappers over the record endpoints. Read operations are generic over
//! the caller's record type; writes take [`Record`](crate::types::Record) maps.

use super::types::{
    AddRecordCommentParams, AddRecordCommentResult, AddRecordParams, AddRecordResult,
    AddRecordsParams, AddRecordsResult, CreateCursorParams, CreateCursorResult,
    DeleteRecordCommentParams, DeleteRecordsParams, GetAllRecordsParams, GetRecordCommentsParams,
    GetRecordCommentsResult, GetRecordsParams, GetRecordsResult, UpdateRecordParams,
    UpdateRecordResult, UpdateRecordStatusParams, UpdateRecordStatusResult, UpdateRecordsParams,
    UpdateRecordsResult, UpdateRecordsStatusParams, UpdateRecordsStatusResult,
    MAX_RECORDS_PER_REQUEST,
};
use crate::decode::{decode_cursor_batch, decode_json, decode_record, decode_records};
use crate::decode::CursorBatch;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::{fetch_all, CancelSignal, QueryClauses, MAX_PAGE_LIMIT};
use crate::types::Method;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Client for record retrieval, writes, cursors, comments and statuses
#[derive(Clone)]
pub struct RecordClient {
    transport: Arc<dyn Transport>,
}

impl RecordClient {
    /// Create a record client over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn send(&self, method: Method, endpoint: &str, body: &impl Serialize) -> Result<Bytes> {
        let body = serde_json::to_value(body)?;
        self.transport.send(method, endpoint, Some(body)).await
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<R> {
        let bytes = self.send(method, endpoint, body).await?;
        decode_json(&bytes)
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    /// Fetch one record by id
    pub async fn get_record<T: DeserializeOwned>(&self, app: &str, id: &str) -> Result<T> {
        ensure_app(app)?;
        let bytes = self
            .send(Method::GET, "record", &json!({ "app": app, "id": id }))
            .await?;
        decode_record(&bytes)
    }

    /// Fetch one page of records
    pub async fn get_records<T: DeserializeOwned>(
        &self,
        params: &GetRecordsParams,
    ) -> Result<GetRecordsResult<T>> {
        ensure_app(&params.app)?;
        debug!(app = %params.app, query = %params.query, "fetching records");
        let bytes = self.send(Method::GET, "records", params).await?;
        decode_records(&bytes)
    }

    /// Fetch every record matching the query, 500 at a time.
    ///
    /// The caller's condition and sort are kept; `limit`/`offset` clauses are
    /// appended per page. Any failure discards the records fetched so far.
    pub async fn get_all_records<T: DeserializeOwned>(
        &self,
        params: &GetAllRecordsParams,
        cancel: &CancelSignal,
    ) -> Result<Vec<T>> {
        ensure_app(&params.app)?;
        let clauses = QueryClauses::new(params.condition.as_str(), params.order_by.as_str());

        fetch_all(&clauses, MAX_PAGE_LIMIT, cancel, |query| {
            let page = GetRecordsParams {
                app: params.app.clone(),
                fields: params.fields.clone(),
                query,
                total_count: false,
            };
            async move { self.get_records::<T>(&page).await.map(|p| p.records) }
        })
        .await
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Create a server-side cursor
    pub async fn create_cursor(&self, params: &CreateCursorParams) -> Result<CreateCursorResult> {
        ensure_app(&params.app)?;
        debug!(app = %params.app, size = ?params.size, "creating cursor");
        self.call(Method::POST, "records/cursor", params).await
    }

    /// Pull the next batch from a cursor
    pub async fn get_records_by_cursor<T: DeserializeOwned>(
        &self,
        id: &str,
    ) -> Result<CursorBatch<T>> {
        let bytes = self
            .send(Method::GET, "records/cursor", &json!({ "id": id }))
            .await?;
        decode_cursor_batch(&bytes)
    }

    /// Delete a cursor; a cursor that is already gone counts as deleted
    pub async fn delete_cursor(&self, id: &str) -> Result<()> {
        match self
            .send(Method::DELETE, "records/cursor", &json!({ "id": id }))
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if err.is_not_found() => {
                debug!(cursor = %id, "cursor already gone");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Add one record
    pub async fn add_record(&self, params: &AddRecordParams) -> Result<AddRecordResult> {
        params.validate()?;
        self.call(Method::POST, "record", params).await
    }

    /// Add up to 100 records
    pub async fn add_records(&self, params: &AddRecordsParams) -> Result<AddRecordsResult> {
        ensure_app(&params.app)?;
        ensure_batch("records", params.records.len())?;
        self.call(Method::POST, "records", params).await
    }

    /// Update one record by id or update key
    pub async fn update_record(&self, params: &UpdateRecordParams) -> Result<UpdateRecordResult> {
        params.validate()?;
        self.call(Method::PUT, "record", params).await
    }

    /// Update up to 100 records
    pub async fn update_records(
        &self,
        params: &UpdateRecordsParams,
    ) -> Result<UpdateRecordsResult> {
        ensure_app(&params.app)?;
        ensure_batch("records", params.records.len())?;
        for item in &params.records {
            ensure_target(item.id.is_some(), item.update_key.is_some())?;
        }
        self.call(Method::PUT, "records", params).await
    }

    /// Delete up to 100 records
    pub async fn delete_records(&self, params: &DeleteRecordsParams) -> Result<()> {
        params.validate()?;
        self.send(Method::DELETE, "records", params).await?;
        Ok(())
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Read a window of a record's comments
    pub async fn get_record_comments(
        &self,
        params: &GetRecordCommentsParams,
    ) -> Result<GetRecordCommentsResult> {
        ensure_app(&params.app)?;
        self.call(Method::GET, "record/comments", params).await
    }

    /// Add a comment to a record
    pub async fn add_record_comment(
        &self,
        params: &AddRecordCommentParams,
    ) -> Result<AddRecordCommentResult> {
        ensure_app(&params.app)?;
        self.call(Method::POST, "record/comment", params).await
    }

    /// Delete a comment
    pub async fn delete_record_comment(&self, params: &DeleteRecordCommentParams) -> Result<()> {
        ensure_app(&params.app)?;
        self.send(Method::DELETE, "record/comment", params).await?;
        Ok(())
    }

    // ========================================================================
    // Process management
    // ========================================================================

    /// Run a process action on one record
    pub async fn update_record_status(
        &self,
        params: &UpdateRecordStatusParams,
    ) -> Result<UpdateRecordStatusResult> {
        ensure_app(&params.app)?;
        self.call(Method::PUT, "record/status", params).await
    }

    /// Run process actions on up to 100 records
    pub async fn update_records_status(
        &self,
        params: &UpdateRecordsStatusParams,
    ) -> Result<UpdateRecordsStatusResult> {
        ensure_app(&params.app)?;
        ensure_batch("records", params.records.len())?;
        self.call(Method::PUT, "records/status", params).await
    }
}

// Checks shared with bulk sub-requests, which skip the record client

impl AddRecordParams {
    pub(crate) fn validate(&self) -> Result<()> {
        ensure_app(&self.app)
    }
}

impl UpdateRecordParams {
    pub(crate) fn validate(&self) -> Result<()> {
        ensure_app(&self.app)?;
        ensure_target(self.id.is_some(), self.update_key.is_some())
    }
}

impl DeleteRecordsParams {
    pub(crate) fn validate(&self) -> Result<()> {
        ensure_app(&self.app)?;
        ensure_batch("ids", self.ids.len())?;
        if !self.revisions.is_empty() && self.revisions.len() != self.ids.len() {
            return Err(Error::validation(format!(
                "revisions must match ids: {} revisions for {} ids",
                self.revisions.len(),
                self.ids.len()
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for RecordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordClient").finish_non_exhaustive()
    }
}

pub(crate) fn ensure_app(app: &str) -> Result<()> {
    if app.trim().is_empty() {
        return Err(Error::validation("app is required"));
    }
    Ok(())
}

fn ensure_batch(what: &str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::validation(format!("{what} must not be empty")));
    }
    if len > MAX_RECORDS_PER_REQUEST {
        return Err(Error::validation(format!(
            "too many {what}: {len} (maximum {MAX_RECORDS_PER_REQUEST})"
        )));
    }
    Ok(())
}

fn ensure_target(has_id: bool, has_update_key: bool) -> Result<()> {
    match (has_id, has_update_key) {
        (true, false) | (false, true) => Ok(()),
        (false, false) => Err(Error::validation("either id or updateKey is required")),
        (true, true) => Err(Error::validation("id and updateKey are mutually exclusive")),
    }
}
