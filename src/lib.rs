// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # kintone-rest
//!
//! A typed client for the kintone REST API.
//!
//! ## Features
//!
//! - **Typed records**: every read is generic over the caller's record type
//! - **Exhaustive retrieval**: offset paging 500 at a time until a short page
//! - **Cursor streaming**: server-side cursors that are always deleted
//! - **Cancellation**: a signal observed before and during every request
//! - **Attachments**: multipart upload, download by file key
//! - **Guest spaces, API tokens, password auth**
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kintone_rest::{Client, ClientConfig, CancelSignal, Result};
//! use kintone_rest::record::{CreateCursorParams, GetAllRecordsParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_config(ClientConfig::from_env()?)?;
//!
//!     // Every record, 500 per request
//!     let params = GetAllRecordsParams::new("7").order_by("$id asc");
//!     let records: Vec<serde_json::Value> =
//!         client.record.get_all_records(&params, &CancelSignal::never()).await?;
//!
//!     // Same set through a cursor, batch by batch
//!     let params = CreateCursorParams::new("7").size(500);
//!     client
//!         .record
//!         .for_each_batch::<serde_json::Value, _>(&params, CancelSignal::never(), |batch| {
//!             println!("{} records", batch.len());
//!             Ok(())
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Client                           │
//! │   record: RecordClient   app   bulk   file   space       │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────┬───────────────┴──────┬──────────────────────┐
//! │ Pagination │ Cursor lifecycle     │ Decode               │
//! ├────────────┼──────────────────────┼──────────────────────┤
//! │ Offset     │ create / pull        │ Typed records        │
//! │ Cancel     │ delete exactly once  │ Pages, batches       │
//! └────────────┴──────────────────────┴──────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │          Transport (HttpClient: reqwest + auth)          │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication headers
pub mod auth;

/// Transport seam and HTTP client
pub mod http;

/// Offset paging and cancellation
pub mod pagination;

/// Typed response decoders
pub mod decode;

/// Record API
pub mod record;

/// App API
pub mod app;

/// Bulk requests
pub mod bulk;

/// File upload and download
pub mod file;

/// Space API
pub mod space;

/// Client configuration
pub mod config;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::{load_config, ClientConfig};
pub use error::{Error, ErrorKind, Result};
pub use pagination::{CancelHandle, CancelSignal};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
