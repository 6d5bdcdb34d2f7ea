//! Catalog browsing orchestrator
//!
//! Reacts to facet and pagination actions, issues the query the selection
//! calls for, and commits settled responses in issue order. State lives
//! behind an async lock that is never held across a network await: the lock
//! is taken to issue (mutate the selection, reserve a tag, flip to Loading),
//! released for the call, and re-taken to commit.

use std::sync::Arc;

use shared::catalog::PriceRange;
use shared::message::NotificationCategory;
use shared::models::Product;
use tokio::sync::RwLock;

use crate::api::CatalogApi;
use crate::notify::Notifier;

use super::facets::FacetState;
use super::merge::{MergePolicy, QueryTag, ResultMerger};
use super::pagination::PaginationState;
use super::query::CatalogRequest;

/// Lifecycle of the latest issued query
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Nothing issued yet
    Idle,
    /// The latest issued query has not settled
    Loading,
    /// The latest issued query committed
    Ready,
    /// The latest issued query failed; the prior visible list is preserved
    Failed(String),
}

/// One issued query: its tag, the request, and the merge policy chosen for it
#[derive(Debug)]
struct IssuedQuery {
    tag: QueryTag,
    request: CatalogRequest,
    policy: MergePolicy,
}

#[derive(Debug)]
struct CatalogInner {
    facets: FacetState,
    pagination: PaginationState,
    merger: ResultMerger,
    visible: Vec<Product>,
    state: CatalogState,
}

/// Catalog browsing state machine
///
/// All actions are async and settle their own query before returning.
/// Overlap comes from the caller: actions started from separate tasks can
/// interleave, and the tag guard in [`ResultMerger`] keeps whichever was
/// issued last authoritative.
pub struct CatalogOrchestrator {
    api: Arc<dyn CatalogApi>,
    notifier: Notifier,
    inner: RwLock<CatalogInner>,
}

impl std::fmt::Debug for CatalogOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogOrchestrator").finish_non_exhaustive()
    }
}

impl CatalogOrchestrator {
    pub fn new(api: Arc<dyn CatalogApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            inner: RwLock::new(CatalogInner {
                facets: FacetState::new(),
                pagination: PaginationState::new(),
                merger: ResultMerger::new(),
                visible: Vec::new(),
                state: CatalogState::Idle,
            }),
        }
    }

    // ========== Actions ==========

    /// Load the list for the current selection from page 1
    ///
    /// With no facet active this is the initial listing load and also
    /// refreshes the catalog total.
    pub async fn refresh(&self) {
        let (issued, unfiltered) = {
            let mut inner = self.inner.write().await;
            inner.pagination.reset();
            let issued = self.issue_for_selection(&mut inner);
            (issued, inner.facets.is_empty())
        };

        self.settle(issued).await;
        if unfiltered {
            self.refresh_total().await;
        }
    }

    /// Toggle a category facet
    ///
    /// Resets to page 1 and replaces the visible list with the result for
    /// the new selection.
    pub async fn toggle_category(&self, id: &str, selected: bool) {
        let (issued, became_empty) = {
            let mut inner = self.inner.write().await;
            let was_empty = inner.facets.is_empty();
            inner.facets.toggle_category(id, selected);
            inner.pagination.reset();
            let issued = self.issue_for_selection(&mut inner);
            (issued, !was_empty && inner.facets.is_empty())
        };

        self.settle(issued).await;
        if became_empty {
            self.refresh_total().await;
        }
    }

    /// Select or clear the price bucket
    pub async fn set_price_range(&self, range: Option<PriceRange>) {
        let (issued, became_empty) = {
            let mut inner = self.inner.write().await;
            let was_empty = inner.facets.is_empty();
            inner.facets.set_price_range(range);
            inner.pagination.reset();
            let issued = self.issue_for_selection(&mut inner);
            (issued, !was_empty && inner.facets.is_empty())
        };

        self.settle(issued).await;
        if became_empty {
            self.refresh_total().await;
        }
    }

    /// Clear every facet and reload the unfiltered listing from page 1
    ///
    /// Purely a state transition; nothing is torn down or re-created.
    pub async fn reset_filters(&self) {
        let issued = {
            let mut inner = self.inner.write().await;
            inner.facets.reset();
            inner.pagination.reset();
            self.issue_for_selection(&mut inner)
        };

        self.settle(issued).await;
        self.refresh_total().await;
    }

    /// Fetch the next listing page and append it to the visible list
    ///
    /// Ignored while a facet filter is active; the filtered query already
    /// returned its full match set.
    pub async fn load_more(&self) {
        let issued = {
            let mut inner = self.inner.write().await;
            if !inner.facets.is_empty() {
                tracing::debug!("load_more ignored while filtered");
                return;
            }
            let page = inner.pagination.advance();
            self.issue(&mut inner, CatalogRequest::listing(page), MergePolicy::Append)
        };

        self.settle(issued).await;
    }

    // ========== Published State ==========

    /// Products from the most recently committed query
    pub async fn visible_list(&self) -> Vec<Product> {
        self.inner.read().await.visible.clone()
    }

    /// True while the latest issued query has not settled
    pub async fn is_loading(&self) -> bool {
        matches!(self.inner.read().await.state, CatalogState::Loading)
    }

    /// Failure reason from the latest settled query, if it failed
    pub async fn error_reason(&self) -> Option<String> {
        match &self.inner.read().await.state {
            CatalogState::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// Whether a load-more control should be offered
    ///
    /// True only while no facet is active and the visible list is shorter
    /// than the unfiltered catalog total.
    pub async fn can_load_more(&self) -> bool {
        let inner = self.inner.read().await;
        inner.facets.is_empty() && (inner.visible.len() as u64) < inner.pagination.total()
    }

    pub async fn state(&self) -> CatalogState {
        self.inner.read().await.state.clone()
    }

    /// Current listing page cursor
    pub async fn page(&self) -> u32 {
        self.inner.read().await.pagination.page()
    }

    /// Last known unfiltered catalog total
    pub async fn total_count(&self) -> u64 {
        self.inner.read().await.pagination.total()
    }

    /// Snapshot of the current facet selection
    pub async fn facet_selection(&self) -> FacetState {
        self.inner.read().await.facets.clone()
    }

    // ========== Internals ==========

    fn issue_for_selection(&self, inner: &mut CatalogInner) -> IssuedQuery {
        let request = CatalogRequest::build(&inner.facets, inner.pagination.page());
        self.issue(inner, request, MergePolicy::Replace)
    }

    fn issue(
        &self,
        inner: &mut CatalogInner,
        request: CatalogRequest,
        policy: MergePolicy,
    ) -> IssuedQuery {
        let tag = inner.merger.issue();
        inner.state = CatalogState::Loading;
        tracing::debug!(tag, ?policy, ?request, "Catalog query issued");
        IssuedQuery {
            tag,
            request,
            policy,
        }
    }

    /// Run an issued query to completion and commit it if still the latest
    async fn settle(&self, issued: IssuedQuery) {
        let result = match &issued.request {
            CatalogRequest::Listing { page } => self.api.product_page(*page).await,
            CatalogRequest::Filtered(filter) => self.api.filtered_products(filter).await,
        };

        let mut inner = self.inner.write().await;
        match result {
            Ok(products) => {
                match inner
                    .merger
                    .commit(issued.tag, issued.policy, &inner.visible, products)
                {
                    Some(merged) => {
                        tracing::debug!(tag = issued.tag, items = merged.len(), "Catalog query committed");
                        inner.visible = merged;
                        inner.state = CatalogState::Ready;
                    }
                    None => {
                        tracing::debug!(
                            tag = issued.tag,
                            latest = inner.merger.latest(),
                            "Stale catalog response dropped"
                        );
                    }
                }
            }
            Err(err) => {
                if inner.merger.is_current(issued.tag) {
                    tracing::error!(tag = issued.tag, error = %err, "Catalog query failed");
                    inner.state = CatalogState::Failed(err.to_string());
                    self.notifier
                        .error(NotificationCategory::Catalog, "Catalog", err.to_string());
                } else {
                    tracing::debug!(tag = issued.tag, error = %err, "Stale catalog failure dropped");
                }
            }
        }
    }

    /// Refresh the unfiltered catalog total
    ///
    /// Failure never touches the visible list or the machine state; the
    /// stale total simply stays in place.
    async fn refresh_total(&self) {
        match self.api.product_count().await {
            Ok(total) => {
                let mut inner = self.inner.write().await;
                inner.pagination.set_total(total);
                tracing::debug!(total, "Catalog total refreshed");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog total refresh failed");
                self.notifier.warning(
                    NotificationCategory::Catalog,
                    "Catalog",
                    format!("Could not refresh product count: {}", err),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientResult;
    use async_trait::async_trait;
    use shared::catalog::ProductFilterRequest;
    use shared::models::Category;

    struct EmptyApi;

    #[async_trait]
    impl CatalogApi for EmptyApi {
        async fn product_page(&self, _page: u32) -> ClientResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn product_count(&self) -> ClientResult<u64> {
            Ok(0)
        }

        async fn filtered_products(
            &self,
            _filter: &ProductFilterRequest,
        ) -> ClientResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn categories(&self) -> ClientResult<Vec<Category>> {
            Ok(Vec::new())
        }
    }

    fn orchestrator() -> CatalogOrchestrator {
        CatalogOrchestrator::new(Arc::new(EmptyApi), Notifier::disabled())
    }

    #[tokio::test]
    async fn test_starts_idle_and_empty() {
        let catalog = orchestrator();
        assert_eq!(catalog.state().await, CatalogState::Idle);
        assert!(catalog.visible_list().await.is_empty());
        assert!(!catalog.is_loading().await);
        assert!(!catalog.can_load_more().await);
        assert_eq!(catalog.page().await, 1);
    }

    #[tokio::test]
    async fn test_refresh_settles_to_ready() {
        let catalog = orchestrator();
        catalog.refresh().await;

        assert_eq!(catalog.state().await, CatalogState::Ready);
        assert_eq!(catalog.error_reason().await, None);
    }

    #[tokio::test]
    async fn test_load_more_is_ignored_while_filtered() {
        let catalog = orchestrator();
        catalog.toggle_category("c1", true).await;
        assert_eq!(catalog.page().await, 1);

        catalog.load_more().await;
        assert_eq!(catalog.page().await, 1);
    }

    #[tokio::test]
    async fn test_facet_change_resets_page() {
        let catalog = orchestrator();
        catalog.refresh().await;
        catalog.load_more().await;
        catalog.load_more().await;
        assert_eq!(catalog.page().await, 3);

        catalog.toggle_category("c1", true).await;
        assert_eq!(catalog.page().await, 1);
    }
}
