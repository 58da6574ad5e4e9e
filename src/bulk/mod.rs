//! Bulk request module
//!
//! Groups up to 20 write requests, possibly across apps, into one call that
//! the server applies atomically.

mod client;
mod types;

pub use client::{BulkClient, BulkRequestBuilder};
pub use types::{BulkRequest, BulkResult, MAX_BULK_REQUESTS};
