//! Decoder functions

use super::types::{CursorBatch, RecordEnvelope, RecordsPage};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode any JSON body into `T`
///
/// Failures carry serde's message (with line and column) and a bounded
/// snippet of the offending body.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string(), body))
}

/// Decode a `{"records": [...], "totalCount": ...}` body
pub fn decode_records<T: DeserializeOwned>(body: &[u8]) -> Result<RecordsPage<T>> {
    decode_json(body)
}

/// Decode a `{"record": {...}}` body
pub fn decode_record<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    decode_json::<RecordEnvelope<T>>(body).map(|envelope| envelope.record)
}

/// Decode a `{"records": [...], "next": bool}` cursor body
pub fn decode_cursor_batch<T: DeserializeOwned>(body: &[u8]) -> Result<CursorBatch<T>> {
    decode_json(body)
}
