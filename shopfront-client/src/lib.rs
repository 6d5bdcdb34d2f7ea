//! Shopfront Client - typed client for the storefront API
//!
//! Provides the catalog browsing state machine (faceted filtering,
//! pagination, ordered result commits), the durable cart, and plain
//! request/response plumbing for the admin surface.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod storage;

pub use api::CatalogApi;
pub use cart::{CART_STORAGE_KEY, CartStore};
pub use catalog::{
    CatalogOrchestrator, CatalogRequest, CatalogState, FacetState, MergePolicy, PaginationState,
    ResultMerger,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use notify::Notifier;
pub use storage::{FileKvStore, KvStore, MemoryKvStore, StorageError, StorageResult};

// Re-export shared types for convenience
pub use shared::catalog::{PRICE_BUCKETS, PriceRange, ProductFilterRequest};
pub use shared::message::{NotificationCategory, NotificationLevel, NotificationPayload};
pub use shared::models::{Category, Product, ProductCreate, ProductUpdate};
