//! Server-side cursor lifecycle
//!
//! A cursor moves `Active -> Exhausted|Deleted` and is deleted exactly once:
//! after the last batch, after a failed or cancelled pull, on [`CursorStream::close`],
//! or in the background when the stream is dropped before a delete completed.
//! A delete interrupted by dropping its future counts as not done.

use super::client::RecordClient;
use super::types::CreateCursorParams;
use crate::error::{Error, Result};
use crate::pagination::CancelSignal;
use futures::Stream;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single cleanup delete
pub const CURSOR_CLEANUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Where a cursor is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// More batches may be pulled
    Active,
    /// The server reported the last batch
    Exhausted,
    /// The delete call has returned, successfully or not
    Deleted,
}

/// Forward-only, non-restartable sequence of record batches
///
/// Not meant to be shared between consumers: pulls take `&mut self`.
pub struct CursorStream<T> {
    client: RecordClient,
    id: String,
    total_count: String,
    state: CursorState,
    fetched: u64,
    cancel: CancelSignal,
    _record: PhantomData<fn() -> T>,
}

impl<T> CursorStream<T> {
    /// Server-assigned cursor id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Total count reported when the cursor was created
    pub fn total_count(&self) -> &str {
        &self.total_count
    }

    /// Current lifecycle state
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Records pulled so far
    pub fn fetched(&self) -> u64 {
        self.fetched
    }

    async fn release(&mut self) -> Result<()> {
        if self.state == CursorState::Deleted {
            return Ok(());
        }

        debug!(cursor = %self.id, fetched = self.fetched, "deleting cursor");
        let outcome =
            tokio::time::timeout(CURSOR_CLEANUP_TIMEOUT, self.client.delete_cursor(&self.id)).await;

        // Only reached when the delete ran to completion; if this future is
        // dropped first, `Drop` still sees a live cursor and retries.
        self.state = CursorState::Deleted;
        match outcome {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                timeout_ms: CURSOR_CLEANUP_TIMEOUT.as_millis() as u64,
            }),
        }
    }

    /// Best-effort delete on a failure path; the caller's error wins
    async fn release_after_error(&mut self) {
        if let Err(cleanup) = self.release().await {
            warn!(cursor = %self.id, error = %cleanup, "failed to delete cursor after error");
        }
    }

    /// Delete the cursor now. Safe to call in any state.
    pub async fn close(mut self) -> Result<()> {
        self.release().await
    }
}

impl<T: DeserializeOwned> CursorStream<T> {
    /// Pull the next batch, or `None` once the cursor is exhausted.
    ///
    /// A failed or cancelled pull deletes the cursor before the error is
    /// returned; later calls yield `None`.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<T>>> {
        if self.state != CursorState::Active {
            return Ok(None);
        }
        if self.cancel.is_cancelled() {
            self.release_after_error().await;
            return Err(Error::Cancelled);
        }

        debug!(cursor = %self.id, "pulling cursor batch");
        let pulled = tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(Error::Cancelled),
            batch = self.client.get_records_by_cursor::<T>(&self.id) => batch,
        };

        match pulled {
            Ok(batch) => {
                self.fetched += batch.records.len() as u64;
                if !batch.next {
                    self.state = CursorState::Exhausted;
                    // The server already invalidated it; this delete is cleanup
                    if let Err(err) = self.release().await {
                        warn!(cursor = %self.id, error = %err, "failed to delete exhausted cursor");
                    }
                }
                Ok(Some(batch.records))
            }
            Err(err) => {
                self.release_after_error().await;
                Err(err)
            }
        }
    }

    /// Drain every remaining batch into one collection (all-or-nothing)
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut records = Vec::new();
        while let Some(batch) = self.next_batch().await? {
            records.extend(batch);
        }
        Ok(records)
    }

    /// Adapt into a [`Stream`] of batches. The stream ends after the last
    /// batch or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<T>>> {
        futures::stream::try_unfold(self, |mut cursor| async move {
            Ok::<_, Error>(cursor.next_batch().await?.map(|batch| (batch, cursor)))
        })
    }
}

impl<T> Drop for CursorStream<T> {
    fn drop(&mut self) {
        let state = std::mem::replace(&mut self.state, CursorState::Deleted);
        if state == CursorState::Deleted {
            return;
        }
        let id = std::mem::take(&mut self.id);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(cursor = %id, "cursor dropped outside a runtime and was not deleted");
            return;
        };

        warn!(cursor = %id, ?state, "cursor dropped before delete, deleting in background");
        let client = self.client.clone();
        runtime.spawn(async move {
            match tokio::time::timeout(CURSOR_CLEANUP_TIMEOUT, client.delete_cursor(&id)).await {
                Ok(Ok(())) => debug!(cursor = %id, "cursor deleted"),
                Ok(Err(err)) => warn!(cursor = %id, error = %err, "failed to delete cursor"),
                Err(_) => warn!(cursor = %id, "timed out deleting cursor"),
            }
        });
    }
}

impl<T> std::fmt::Debug for CursorStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorStream")
            .field("id", &self.id)
            .field("total_count", &self.total_count)
            .field("state", &self.state)
            .field("fetched", &self.fetched)
            .finish_non_exhaustive()
    }
}

impl RecordClient {
    /// Create a cursor and return it as a batch stream.
    ///
    /// Creation itself is not raced against `cancel`, so a cursor id is never
    /// lost in flight; the first pull observes the signal instead.
    pub async fn stream_records<T: DeserializeOwned>(
        &self,
        params: &CreateCursorParams,
        cancel: CancelSignal,
    ) -> Result<CursorStream<T>> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let created = self.create_cursor(params).await?;
        debug!(cursor = %created.id, total = %created.total_count, "cursor created");

        Ok(CursorStream {
            client: self.clone(),
            id: created.id,
            total_count: created.total_count,
            state: CursorState::Active,
            fetched: 0,
            cancel,
            _record: PhantomData,
        })
    }

    /// Scoped cursor use: create, hand every batch to `f`, always delete.
    ///
    /// An error from `f` stops the pull loop, deletes the cursor and is
    /// returned as-is. Returns the number of records seen.
    pub async fn for_each_batch<T, F>(
        &self,
        params: &CreateCursorParams,
        cancel: CancelSignal,
        mut f: F,
    ) -> Result<u64>
    where
        T: DeserializeOwned,
        F: FnMut(Vec<T>) -> Result<()>,
    {
        let mut cursor = self.stream_records::<T>(params, cancel).await?;
        while let Some(batch) = cursor.next_batch().await? {
            if let Err(err) = f(batch) {
                cursor.release_after_error().await;
                return Err(err);
            }
        }
        Ok(cursor.fetched())
    }

    /// Fetch every matching record through a cursor (all-or-nothing)
    pub async fn get_all_records_by_cursor<T: DeserializeOwned>(
        &self,
        params: &CreateCursorParams,
        cancel: CancelSignal,
    ) -> Result<Vec<T>> {
        self.stream_records::<T>(params, cancel)
            .await?
            .collect_all()
            .await
    }
}
