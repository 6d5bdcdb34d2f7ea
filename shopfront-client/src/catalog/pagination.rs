//! Pagination cursor for the unfiltered listing

/// Page cursor plus the last known catalog total
///
/// Pages are 1-based and only move forward through `advance`; `reset` is the
/// only way back. The total counts the unfiltered catalog and is meaningful
/// only while no facet filter is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page: u32,
    total: u64,
}

impl PaginationState {
    pub fn new() -> Self {
        Self { page: 1, total: 0 }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Move to the next page and return it
    pub fn advance(&mut self) -> u32 {
        self.page += 1;
        self.page
    }

    /// Back to page 1; the known total is kept
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Record the unfiltered catalog size
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}
