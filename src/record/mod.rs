//! Record module
//!
//! Record retrieval (single, page, exhaustive, cursor), writes, comments
//! and process-management status updates.

mod client;
mod cursor;
mod types;

pub use client::RecordClient;
pub(crate) use client::ensure_app;
pub use cursor::{CursorState, CursorStream, CURSOR_CLEANUP_TIMEOUT};
pub use types::*;
