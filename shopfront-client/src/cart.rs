//! Durable cart
//!
//! An append-only list of product snapshots, mirrored to key-value storage
//! on every mutation. Duplicates are allowed: adding the same product twice
//! stores two independent snapshots. Removal and quantity editing live in a
//! later checkout surface, not here.

use std::sync::Arc;

use shared::message::NotificationCategory;
use shared::models::Product;

use crate::notify::Notifier;
use crate::storage::{KvStore, StorageResult};

/// Fixed storage key for the serialized cart snapshot
pub const CART_STORAGE_KEY: &str = "cart";

/// Cart of product snapshots persisted through an injected store
pub struct CartStore {
    storage: Arc<dyn KvStore>,
    notifier: Notifier,
    items: Vec<Product>,
}

impl CartStore {
    /// Empty cart; does not consult storage
    pub fn new(storage: Arc<dyn KvStore>, notifier: Notifier) -> Self {
        Self {
            storage,
            notifier,
            items: Vec::new(),
        }
    }

    /// Load the persisted cart
    ///
    /// A missing key or an unreadable snapshot yields an empty cart;
    /// hydration never fails.
    pub fn hydrate(storage: Arc<dyn KvStore>, notifier: Notifier) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(error = %err, "Cart snapshot unparseable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Cart snapshot unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            storage,
            notifier,
            items,
        }
    }

    /// Append a snapshot of `product` and persist the whole cart
    ///
    /// The in-memory append stands even when the storage write fails; the
    /// error is returned so callers can surface it.
    pub fn add(&mut self, product: &Product) -> StorageResult<()> {
        self.items.push(product.clone());

        match self.persist() {
            Ok(()) => {
                tracing::debug!(product_id = %product.id, count = self.items.len(), "Cart item added");
                self.notifier
                    .info(NotificationCategory::Cart, "Cart", "Item added to cart");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Cart persist failed");
                self.notifier.error(
                    NotificationCategory::Cart,
                    "Cart",
                    format!("Could not save cart: {}", err),
                );
                Err(err)
            }
        }
    }

    /// Items in the order they were added
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> StorageResult<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(CART_STORAGE_KEY, &raw)
    }
}
