//! Catalog wire types
//!
//! Request and response shapes for the product API. Response envelopes are
//! flat: a `success` flag next to the payload fields, with an optional
//! `message` on refusals. Older backend revisions omit `success` on some
//! routes, so a missing flag reads as success.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Product};

fn default_true() -> bool {
    true
}

// ==================== Price Buckets ====================

/// A price facet bucket, serialized as a `[lower, upper]` pair
/// in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange(pub u32, pub u32);

impl PriceRange {
    pub fn lower(&self) -> u32 {
        self.0
    }

    pub fn upper(&self) -> u32 {
        self.1
    }
}

/// The fixed set of buckets offered as facet options. Single-select.
pub const PRICE_BUCKETS: [PriceRange; 6] = [
    PriceRange(0, 19),
    PriceRange(20, 39),
    PriceRange(40, 59),
    PriceRange(60, 79),
    PriceRange(80, 99),
    PriceRange(100, 9999),
];

// ==================== Requests ====================

/// Body of the filtered catalog query
///
/// `priceRangeToken` is the empty string when no bucket is selected and a
/// `[lower, upper]` pair when one is. The filtered query has no page field;
/// it returns its entire matching set in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilterRequest {
    pub selected_category_ids: Vec<String>,
    #[serde(with = "price_token")]
    pub price_range_token: Option<PriceRange>,
}

mod price_token {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::PriceRange;

    pub fn serialize<S>(value: &Option<PriceRange>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(range) => range.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PriceRange>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) if s.is_empty() => Ok(None),
            other => serde_json::from_value(other)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}

// ==================== Responses ====================

/// Listing page and filtered query response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Total catalog size response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCountResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total: u64,
}

/// Category facet options response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub category: Vec<Category>,
}

/// Single product detail response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub product: Option<Product>,
}

/// Category landing response: one category plus its full product set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryProductsResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
    pub category: Option<Category>,
}

/// Admin gate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAuthResponse {
    pub ok: bool,
}

/// Admin mutation acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminMutationResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_request_without_bucket_serializes_empty_token() {
        let request = ProductFilterRequest {
            selected_category_ids: vec!["c1".to_string(), "c2".to_string()],
            price_range_token: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["selectedCategoryIds"][0], "c1");
        assert_eq!(json["priceRangeToken"], "");
    }

    #[test]
    fn test_filter_request_with_bucket_serializes_bounds_pair() {
        let request = ProductFilterRequest {
            selected_category_ids: vec![],
            price_range_token: Some(PriceRange(20, 39)),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["priceRangeToken"], serde_json::json!([20, 39]));
    }

    #[test]
    fn test_filter_request_token_deserializes_both_encodings() {
        let with_bucket: ProductFilterRequest = serde_json::from_str(
            r#"{"selectedCategoryIds":["c1"],"priceRangeToken":[40,59]}"#,
        )
        .unwrap();
        assert_eq!(with_bucket.price_range_token, Some(PriceRange(40, 59)));

        let without: ProductFilterRequest =
            serde_json::from_str(r#"{"selectedCategoryIds":[],"priceRangeToken":""}"#).unwrap();
        assert_eq!(without.price_range_token, None);

        let null_token: ProductFilterRequest =
            serde_json::from_str(r#"{"selectedCategoryIds":[],"priceRangeToken":null}"#).unwrap();
        assert_eq!(null_token.price_range_token, None);
    }

    #[test]
    fn test_price_buckets_cover_ascending_bounds() {
        assert_eq!(PRICE_BUCKETS.len(), 6);
        assert_eq!(PRICE_BUCKETS[0], PriceRange(0, 19));
        assert_eq!(PRICE_BUCKETS[5].lower(), 100);
        for pair in PRICE_BUCKETS.windows(2) {
            assert!(pair[0].upper() < pair[1].lower());
        }
    }

    #[test]
    fn test_list_response_missing_success_reads_as_success() {
        let response: ProductListResponse =
            serde_json::from_str(r#"{"products":[]}"#).unwrap();
        assert!(response.success);
        assert!(response.products.is_empty());
    }

    #[test]
    fn test_list_response_refusal_keeps_message() {
        let response: ProductListResponse = serde_json::from_str(
            r#"{"success":false,"message":"Error while fetching products"}"#,
        )
        .unwrap();
        assert!(!response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("Error while fetching products")
        );
    }

    #[test]
    fn test_count_response_shape() {
        let response: ProductCountResponse =
            serde_json::from_str(r#"{"success":true,"total":45}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.total, 45);
    }
}
