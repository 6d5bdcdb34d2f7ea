// shopfront-client/examples/browse.rs
// Browse the catalog of a running storefront backend

use std::sync::Arc;

use shopfront_client::{
    CartStore, CatalogApi, CatalogOrchestrator, ClientConfig, FileKvStore, HttpClient, Notifier,
    PRICE_BUCKETS,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("SHOPFRONT_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let data_dir =
        std::env::var("SHOPFRONT_DATA_DIR").unwrap_or_else(|_| "./shopfront-data".to_string());

    let config = ClientConfig::new(&base_url);
    let client = Arc::new(HttpClient::new(&config));

    let (notifier, mut notifications) = Notifier::channel();
    tokio::spawn(async move {
        while let Some(payload) = notifications.recv().await {
            tracing::info!("[{}] {}: {}", payload.level, payload.title, payload.message);
        }
    });

    // Facet options
    let categories = match client.categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!("Failed to fetch categories from {}: {}", base_url, e);
            return Err(e.into());
        }
    };
    tracing::info!("{} categories available", categories.len());

    let catalog = CatalogOrchestrator::new(client.clone(), notifier.clone());

    // Unfiltered listing, page by page
    catalog.refresh().await;
    tracing::info!(
        "Page 1: {} of {} products",
        catalog.visible_list().await.len(),
        catalog.total_count().await
    );

    while catalog.can_load_more().await {
        catalog.load_more().await;
        tracing::info!(
            "Page {}: {} products loaded",
            catalog.page().await,
            catalog.visible_list().await.len()
        );
    }

    // Facet filtering
    if let Some(first) = categories.first() {
        catalog.toggle_category(&first.id, true).await;
        tracing::info!(
            "Filtered by '{}': {} products",
            first.name,
            catalog.visible_list().await.len()
        );

        catalog.set_price_range(Some(PRICE_BUCKETS[1])).await;
        tracing::info!(
            "Also priced {}..{}: {} products",
            PRICE_BUCKETS[1].lower(),
            PRICE_BUCKETS[1].upper(),
            catalog.visible_list().await.len()
        );

        catalog.reset_filters().await;
        tracing::info!(
            "Filters cleared: {} products visible",
            catalog.visible_list().await.len()
        );
    }

    if let Some(reason) = catalog.error_reason().await {
        tracing::error!("Catalog ended in failure: {}", reason);
    }

    // Put the first visible product in the durable cart
    let storage = Arc::new(FileKvStore::new(&data_dir));
    let mut cart = CartStore::hydrate(storage, notifier);
    if let Some(first) = catalog.visible_list().await.first() {
        cart.add(first)?;
    }
    tracing::info!("Cart holds {} item(s)", cart.len());

    Ok(())
}
