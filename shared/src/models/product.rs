//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity as served by the catalog API
///
/// Read-only to the client; the visible list and the cart hold snapshots of
/// these. Unknown wire fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Currency-agnostic at this layer; the backend serves plain numbers
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Category reference (String ID)
    pub category: String,
    /// Stock on hand
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub shipping: bool,
}

/// Create product payload (admin surface)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i64,
    pub category: String,
    pub shipping: bool,
}

/// Update product payload (admin surface)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub shipping: Option<bool>,
}
