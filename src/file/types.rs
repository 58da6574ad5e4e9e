//! File API types

use serde::{Deserialize, Serialize};

/// Temporary key of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    /// Put this into a `FILE` field to attach the file; unused keys expire
    pub file_key: String,
}
