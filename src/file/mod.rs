//! File module
//!
//! Attachments travel separately from records: upload first to get a file
//! key, then reference the key in a `FILE` field value. Downloads take the
//! key found in a record's `FILE` field.

mod client;
mod types;

pub use client::FileClient;
pub use types::UploadResult;
