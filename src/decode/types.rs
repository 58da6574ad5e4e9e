//! Wire shapes of record responses

use serde::Deserialize;

/// One page of records from a single query
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordsPage<T> {
    /// Records in server order
    pub records: Vec<T>,
    /// Total number of matching records, when requested
    #[serde(default, rename = "totalCount")]
    pub total_count: Option<String>,
}

impl<T> RecordsPage<T> {
    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the page is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One batch pulled from a server-side cursor
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CursorBatch<T> {
    /// Records in this batch
    pub records: Vec<T>,
    /// Whether further batches remain
    pub next: bool,
}

/// Envelope of the single-record endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct RecordEnvelope<T> {
    pub record: T,
}
