//! HTTP client module
//!
//! Provides the [`Transport`] seam every API client talks through, and the
//! reqwest-backed [`HttpClient`] that implements it.
//!
//! # Features
//!
//! - **Guest spaces**: paths switch to `/k/guest/{id}/v1/...` when configured
//! - **Bodies on every verb**: GET and DELETE carry JSON payloads
//! - **Files**: multipart uploads and query-string downloads
//! - **Structured errors**: non-success bodies decode into [`crate::error::ApiError`]

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::Transport;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
