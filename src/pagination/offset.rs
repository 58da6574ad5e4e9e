//! Exhaustive offset paging

use super::cancel::CancelSignal;
use super::types::{PaginationState, QueryClauses};
use crate::error::{Error, Result};
use std::future::Future;
use tracing::debug;

/// Page through an entire result set, accumulating every record.
///
/// `fetch_page` receives the full query string for one page (caller clauses
/// followed by `limit {limit} offset {offset}`) and returns that page's
/// records. Offsets advance `0, limit, 2*limit, ...` strictly in order, one
/// request at a time. A page shorter than `limit` ends the loop, so a result
/// set that is an exact multiple of `limit` costs one extra, empty request.
///
/// All-or-nothing: any page error or cancellation discards what was
/// accumulated and returns the error.
pub async fn fetch_all<T, F, Fut>(
    clauses: &QueryClauses,
    limit: u32,
    cancel: &CancelSignal,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if limit == 0 {
        return Err(Error::validation("page limit must be at least 1"));
    }

    let mut state = PaginationState::new();
    let mut records = Vec::new();

    while !state.done {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let query = clauses.with_page(limit, state.offset);
        debug!(offset = state.offset, limit, "fetching page");

        let page = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            page = fetch_page(query) => page?,
        };

        let count = page.len();
        state.record_page(count);
        records.extend(page);

        if count < limit as usize {
            state.mark_done();
        } else {
            state.add_offset(limit);
        }
    }

    debug!(
        pages = state.pages,
        records = state.total_fetched,
        "pagination complete"
    );
    Ok(records)
}
