//! Result merging and the stale-response guard

use shared::models::Product;

/// How a settled response combines with the visible list
///
/// Chosen at issue time by why the query was issued, never by the shape of
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Response becomes the entire visible list
    Replace,
    /// Response concatenates after the visible list, without de-duplication
    Append,
}

/// Monotonic tag reserved for each issued query
pub type QueryTag = u64;

/// Orders commits: only the most recently issued query may change the list
///
/// Tags are reserved at issue time and compared when the response settles.
/// There is no cancellation; a response whose tag is no longer the latest is
/// simply dropped.
#[derive(Debug, Default)]
pub struct ResultMerger {
    latest: QueryTag,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next tag; it becomes the latest
    pub fn issue(&mut self) -> QueryTag {
        self.latest += 1;
        self.latest
    }

    /// The most recently issued tag
    pub fn latest(&self) -> QueryTag {
        self.latest
    }

    /// Whether `tag` still belongs to the most recently issued query
    pub fn is_current(&self, tag: QueryTag) -> bool {
        tag == self.latest
    }

    /// Apply a settled response, or reject it as stale
    ///
    /// Returns the new visible list when `tag` is still the latest, `None`
    /// when a newer query was issued after it.
    pub fn commit(
        &self,
        tag: QueryTag,
        policy: MergePolicy,
        previous: &[Product],
        incoming: Vec<Product>,
    ) -> Option<Vec<Product>> {
        if !self.is_current(tag) {
            return None;
        }

        match policy {
            MergePolicy::Replace => Some(incoming),
            MergePolicy::Append => {
                let mut merged = Vec::with_capacity(previous.len() + incoming.len());
                merged.extend_from_slice(previous);
                merged.extend(incoming);
                Some(merged)
            }
        }
    }
}
