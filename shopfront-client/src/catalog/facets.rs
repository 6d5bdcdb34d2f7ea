//! Facet selection state

use std::collections::BTreeSet;

use shared::catalog::{PriceRange, ProductFilterRequest};

/// The user's current facet selection
///
/// Categories are multi-select, the price bucket is single-select. Ids are
/// kept sorted so filter bodies serialize reproducibly. Unknown ids are
/// accepted as-is; the backend decides what they match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetState {
    categories: BTreeSet<String>,
    price_range: Option<PriceRange>,
}

impl FacetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a category id
    pub fn toggle_category(&mut self, id: &str, selected: bool) {
        if selected {
            self.categories.insert(id.to_string());
        } else {
            self.categories.remove(id);
        }
    }

    /// Replace the price bucket; `None` clears it
    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
    }

    /// Clear both facet dimensions
    pub fn reset(&mut self) {
        self.categories.clear();
        self.price_range = None;
    }

    /// True when no facet is active
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.price_range.is_none()
    }

    pub fn selected_categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    /// Wire body for the filtered query
    pub fn to_filter_request(&self) -> ProductFilterRequest {
        ProductFilterRequest {
            selected_category_ids: self.categories.iter().cloned().collect(),
            price_range_token: self.price_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut facets = FacetState::new();
        assert!(facets.is_empty());

        facets.toggle_category("c1", true);
        facets.toggle_category("c2", true);
        assert!(!facets.is_empty());
        assert_eq!(facets.selected_categories().count(), 2);

        facets.toggle_category("c1", false);
        assert_eq!(facets.selected_categories().collect::<Vec<_>>(), ["c2"]);
    }

    #[test]
    fn test_toggle_same_id_twice_keeps_one_entry() {
        let mut facets = FacetState::new();
        facets.toggle_category("c1", true);
        facets.toggle_category("c1", true);
        assert_eq!(facets.selected_categories().count(), 1);
    }

    #[test]
    fn test_price_bucket_is_single_select() {
        let mut facets = FacetState::new();
        facets.set_price_range(Some(PriceRange(0, 19)));
        facets.set_price_range(Some(PriceRange(40, 59)));
        assert_eq!(facets.price_range(), Some(PriceRange(40, 59)));

        facets.set_price_range(None);
        assert!(facets.is_empty());
    }

    #[test]
    fn test_reset_clears_both_dimensions() {
        let mut facets = FacetState::new();
        facets.toggle_category("c1", true);
        facets.set_price_range(Some(PriceRange(20, 39)));

        facets.reset();
        assert!(facets.is_empty());
    }

    #[test]
    fn test_filter_request_lists_ids_sorted() {
        let mut facets = FacetState::new();
        facets.toggle_category("c9", true);
        facets.toggle_category("c1", true);

        let request = facets.to_filter_request();
        assert_eq!(request.selected_category_ids, ["c1", "c9"]);
        assert_eq!(request.price_range_token, None);
    }
}
