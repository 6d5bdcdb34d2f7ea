//! Catalog query construction
//!
//! Pure mapping from the current selection to the query to issue. Filtering
//! and pagination are mutually exclusive: a filtered request structurally
//! carries no page number and returns its entire match set, while the
//! unfiltered listing is fetched page by page.

use shared::catalog::ProductFilterRequest;

use super::facets::FacetState;

/// The query the orchestrator should issue next
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRequest {
    /// Unfiltered listing page
    Listing { page: u32 },
    /// Facet-constrained query returning the full match set
    Filtered(ProductFilterRequest),
}

impl CatalogRequest {
    /// Decide the query for a selection and page
    ///
    /// Any active facet switches to the filtered query and discards the
    /// page argument.
    pub fn build(facets: &FacetState, page: u32) -> Self {
        if facets.is_empty() {
            Self::Listing { page }
        } else {
            Self::Filtered(facets.to_filter_request())
        }
    }

    /// Listing continuation for an explicit load-more action
    pub fn listing(page: u32) -> Self {
        Self::Listing { page }
    }
}
