//! Pagination module
//!
//! Supports: offset paging through the query string, server-side cursors
//!
//! # Overview
//!
//! The platform's records endpoint has no "has more" flag, so exhaustive
//! retrieval appends `limit L offset N` to the caller's query and stops on the
//! first short page. This module owns that clause grammar, the paging loop
//! ([`fetch_all`]) and the [`CancelSignal`] both paging modes observe. The
//! cursor lifecycle lives with the record client in `crate::record`.

mod cancel;
mod offset;
mod types;

pub use cancel::{CancelHandle, CancelSignal};
pub use offset::fetch_all;
pub use types::{PaginationState, QueryClauses, MAX_PAGE_LIMIT};
