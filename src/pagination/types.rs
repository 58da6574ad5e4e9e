//! Pagination types
//!
//! Query clause composition and the state tracked while paging.

/// Largest page the records endpoint returns in one call
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Caller-supplied filter and sort clauses of a query string
///
/// Clauses compose positionally: `<condition> order by <order_by> limit <L> offset <N>`.
/// Blank clauses are omitted and present ones are joined by a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryClauses {
    /// Filter expression, e.g. `status = "open"`
    pub condition: String,
    /// Sort expression without the `order by` keyword, e.g. `id desc`
    pub order_by: String,
}

impl QueryClauses {
    /// Create clauses from a condition and a sort expression
    pub fn new(condition: impl Into<String>, order_by: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            order_by: order_by.into(),
        }
    }

    /// Query string without any paging clause
    pub fn build(&self) -> String {
        self.parts().join(" ")
    }

    /// Query string for one page
    pub fn with_page(&self, limit: u32, offset: u64) -> String {
        let page = format!("limit {limit} offset {offset}");
        let mut parts = self.parts();
        parts.push(page);
        parts.join(" ")
    }

    fn parts(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(3);
        let condition = self.condition.trim();
        if !condition.is_empty() {
            parts.push(condition.to_string());
        }
        let order_by = self.order_by.trim();
        if !order_by.is_empty() {
            parts.push(format!("order by {order_by}"));
        }
        parts
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Offset of the next page
    pub offset: u64,
    /// Pages requested so far
    pub pages: u64,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a received page of `count` records
    pub fn record_page(&mut self, count: usize) {
        self.pages += 1;
        self.total_fetched += count as u64;
    }

    /// Advance to the next page
    pub fn add_offset(&mut self, amount: u32) {
        self.offset += u64::from(amount);
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
