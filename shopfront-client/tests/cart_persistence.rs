// shopfront-client/tests/cart_persistence.rs
// Cart snapshots round-tripped through file-backed storage

use std::sync::Arc;

use rust_decimal::Decimal;
use shopfront_client::{CART_STORAGE_KEY, CartStore, FileKvStore, KvStore, Notifier, Product};
use tempfile::TempDir;

fn product(id: &str, name: &str, price: Decimal) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: format!("{} description", name),
        price,
        category: "c1".to_string(),
        quantity: 3,
        shipping: true,
    }
}

#[test]
fn test_cart_survives_restart() {
    let dir = TempDir::new().unwrap();
    let laptop = product("p1", "Laptop", Decimal::new(99900, 2));
    let phone = product("p2", "Phone", Decimal::new(49900, 2));

    {
        let storage = Arc::new(FileKvStore::new(dir.path()));
        let mut cart = CartStore::new(storage, Notifier::disabled());
        cart.add(&laptop).unwrap();
        cart.add(&laptop).unwrap();
        cart.add(&phone).unwrap();
    }

    let storage = Arc::new(FileKvStore::new(dir.path()));
    let cart = CartStore::hydrate(storage, Notifier::disabled());

    assert_eq!(cart.len(), 3);
    assert_eq!(cart.items()[0].id, "p1");
    assert_eq!(cart.items()[1].id, "p1");
    assert_eq!(cart.items()[2].id, "p2");
}

#[test]
fn test_snapshot_is_a_plain_json_array() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKvStore::new(dir.path()));
    let mut cart = CartStore::new(storage.clone(), Notifier::disabled());
    cart.add(&product("p1", "Laptop", Decimal::new(99900, 2)))
        .unwrap();

    let raw = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["_id"], "p1");
    assert_eq!(entries[0]["name"], "Laptop");
    assert!(entries[0]["price"].is_number());
}

#[test]
fn test_missing_snapshot_hydrates_empty() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKvStore::new(dir.path()));

    let cart = CartStore::hydrate(storage, Notifier::disabled());
    assert!(cart.is_empty());
}

#[test]
fn test_corrupt_snapshot_recovers_on_next_add() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKvStore::new(dir.path()));
    storage.set(CART_STORAGE_KEY, "{definitely not json").unwrap();

    let mut cart = CartStore::hydrate(storage.clone(), Notifier::disabled());
    assert!(cart.is_empty());

    cart.add(&product("p1", "Laptop", Decimal::new(99900, 2)))
        .unwrap();

    let reloaded = CartStore::hydrate(storage, Notifier::disabled());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.items()[0].id, "p1");
}
