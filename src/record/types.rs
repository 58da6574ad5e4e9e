//! Record API parameter and result types
//!
//! Parameter structs serialize directly into request bodies, so their field
//! names follow the wire format (camelCase, empty options omitted).

use crate::decode::RecordsPage;
use crate::types::{AppId, Record, RecordId, Revision, UpdateKey, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum records in one bulk write, delete or status update
pub const MAX_RECORDS_PER_REQUEST: usize = 100;

/// Upper bound the server applies to a cursor's batch size
pub const MAX_CURSOR_SIZE: u32 = 500;

// ============================================================================
// Retrieval
// ============================================================================

/// Parameters for a single-page query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecordsParams {
    /// Target app
    pub app: AppId,
    /// Field codes to project (empty = all fields)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Full query string, paging clauses included
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Ask the server for the total match count
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub total_count: bool,
}

impl GetRecordsParams {
    /// Create params for an app
    pub fn new(app: impl Into<AppId>) -> Self {
        Self {
            app: app.into(),
            ..Default::default()
        }
    }

    /// Project to these fields
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the query string
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Request the total count
    #[must_use]
    pub fn with_total_count(mut self) -> Self {
        self.total_count = true;
        self
    }
}

/// One page returned by a single-page query
pub type GetRecordsResult<T> = RecordsPage<T>;

/// Parameters for exhaustive retrieval; paging clauses are added internally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAllRecordsParams {
    /// Target app
    pub app: AppId,
    /// Field codes to project (empty = all fields)
    pub fields: Vec<String>,
    /// Filter expression without order/limit/offset
    pub condition: String,
    /// Sort expression without the `order by` keyword
    pub order_by: String,
}

impl GetAllRecordsParams {
    /// Create params for an app
    pub fn new(app: impl Into<AppId>) -> Self {
        Self {
            app: app.into(),
            ..Default::default()
        }
    }

    /// Project to these fields
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the filter expression
    #[must_use]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Set the sort expression
    #[must_use]
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Parameters for creating a server-side cursor
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateCursorParams {
    /// Target app
    pub app: AppId,
    /// Field codes to project (empty = all fields)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Filter/sort query; must not contain limit or offset
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Records per batch; the server clamps to its own maximum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl CreateCursorParams {
    /// Create params for an app
    pub fn new(app: impl Into<AppId>) -> Self {
        Self {
            app: app.into(),
            ..Default::default()
        }
    }

    /// Project to these fields
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the query string
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the batch size
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// A freshly created cursor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCursorResult {
    /// Opaque cursor id
    pub id: String,
    /// Matching records at creation time
    pub total_count: String,
}

// ============================================================================
// Writes
// ============================================================================

/// Parameters for adding one record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddRecordParams {
    /// Target app
    pub app: AppId,
    /// Field values
    pub record: Record,
}

/// Result of adding one record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddRecordResult {
    /// New record id
    pub id: RecordId,
    /// Initial revision
    pub revision: Revision,
}

/// Parameters for adding up to 100 records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddRecordsParams {
    /// Target app
    pub app: AppId,
    /// Records to add
    pub records: Vec<Record>,
}

/// Result of adding records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddRecordsResult {
    /// New record ids, in request order
    pub ids: Vec<RecordId>,
    /// Initial revisions, in request order
    pub revisions: Vec<Revision>,
}

/// Parameters for updating one record by id or update key
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordParams {
    /// Target app
    pub app: AppId,
    /// Record id (exclusive with `update_key`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Unique-field key (exclusive with `id`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_key: Option<UpdateKey>,
    /// Field values to change
    pub record: Record,
    /// Expected revision; the update fails on mismatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
}

/// Result of updating one record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateRecordResult {
    /// Revision after the update
    pub revision: Revision,
}

/// One entry of a multi-record update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordsItem {
    /// Record id (exclusive with `update_key`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Unique-field key (exclusive with `id`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_key: Option<UpdateKey>,
    /// Field values to change
    pub record: Record,
    /// Expected revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
}

/// Parameters for updating up to 100 records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateRecordsParams {
    /// Target app
    pub app: AppId,
    /// Records to update
    pub records: Vec<UpdateRecordsItem>,
}

/// Id and revision pair returned by multi-record writes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordRevision {
    /// Record id
    pub id: RecordId,
    /// Revision after the write
    pub revision: Revision,
}

/// Result of updating records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateRecordsResult {
    /// Updated records, in request order
    pub records: Vec<RecordRevision>,
}

/// Parameters for deleting up to 100 records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteRecordsParams {
    /// Target app
    pub app: AppId,
    /// Record ids
    pub ids: Vec<RecordId>,
    /// Expected revisions, parallel to `ids` when given
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub revisions: Vec<Revision>,
}

// ============================================================================
// Comments
// ============================================================================

/// Sort order of comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

/// Parameters for reading a record's comments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetRecordCommentsParams {
    /// Target app
    pub app: AppId,
    /// Record id
    pub record: RecordId,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<CommentOrder>,
    /// Comments to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Comments to return (server maximum 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Mention target kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MentionType {
    /// A user
    User,
    /// A group
    Group,
    /// An organization
    Organization,
}

/// A mention inside a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// User, group or organization code
    pub code: String,
    /// Kind of the target
    #[serde(rename = "type")]
    pub kind: MentionType,
}

/// A stored comment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id
    pub id: String,
    /// Plain text body
    pub text: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Author
    pub creator: User,
    /// Mentions
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

/// Result of reading comments
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetRecordCommentsResult {
    /// Comments in requested order
    pub comments: Vec<Comment>,
    /// More comments exist beyond this window (older side)
    pub older: bool,
    /// More comments exist beyond this window (newer side)
    pub newer: bool,
}

/// Body of a new comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewComment {
    /// Plain text body
    pub text: String,
    /// Mentions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

/// Parameters for adding a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddRecordCommentParams {
    /// Target app
    pub app: AppId,
    /// Record id
    pub record: RecordId,
    /// Comment to add
    pub comment: NewComment,
}

/// Result of adding a comment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddRecordCommentResult {
    /// New comment id
    pub id: String,
}

/// Parameters for deleting a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteRecordCommentParams {
    /// Target app
    pub app: AppId,
    /// Record id
    pub record: RecordId,
    /// Comment id
    pub comment: String,
}

// ============================================================================
// Process management
// ============================================================================

/// Parameters for running a process action on one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRecordStatusParams {
    /// Target app
    pub app: AppId,
    /// Record id
    pub id: RecordId,
    /// Action name as configured in the app
    pub action: String,
    /// Next assignee, when the action requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Expected revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
}

/// Result of a status update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateRecordStatusResult {
    /// Revision after the update
    pub revision: Revision,
}

/// One entry of a multi-record status update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// Record id
    pub id: RecordId,
    /// Action name
    pub action: String,
    /// Next assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Expected revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
}

/// Parameters for updating up to 100 statuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRecordsStatusParams {
    /// Target app
    pub app: AppId,
    /// Status updates
    pub records: Vec<StatusUpdate>,
}

/// Result of a multi-record status update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateRecordsStatusResult {
    /// Updated records
    pub records: Vec<RecordRevision>,
}
