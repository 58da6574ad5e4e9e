//! File API client

use super::types::UploadResult;
use crate::decode::decode_json;
use crate::error::{Error, Result};
use crate::http::Transport;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Client for attachment upload and download
#[derive(Clone)]
pub struct FileClient {
    transport: Arc<dyn Transport>,
}

impl FileClient {
    /// Create a file client over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Upload one file and return its key
    pub async fn upload(
        &self,
        file_name: &str,
        content: impl Into<Bytes>,
    ) -> Result<UploadResult> {
        if file_name.trim().is_empty() {
            return Err(Error::validation("file name is required"));
        }
        let content = content.into();
        debug!(file_name, bytes = content.len(), "uploading file");
        let bytes = self.transport.upload("file", file_name, content).await?;
        decode_json(&bytes)
    }

    /// Download a file by the key from a record's `FILE` field
    pub async fn download(&self, file_key: &str) -> Result<Bytes> {
        if file_key.trim().is_empty() {
            return Err(Error::validation("file key is required"));
        }
        debug!(file_key, "downloading file");
        self.transport.download("file", &[("fileKey", file_key)]).await
    }
}

impl std::fmt::Debug for FileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileClient").finish_non_exhaustive()
    }
}
