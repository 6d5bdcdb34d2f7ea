//! Shared types for the shopfront client
//!
//! Wire-facing types used across crates: product and category models,
//! catalog request/response structures, and notification payloads.

pub mod catalog;
pub mod message;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{PRICE_BUCKETS, PriceRange, ProductFilterRequest};
pub use message::{NotificationCategory, NotificationLevel, NotificationPayload};
pub use models::{Category, Product};
