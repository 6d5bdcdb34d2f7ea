//! Catalog API seam
//!
//! The browsing state machine depends on this trait rather than on the
//! concrete HTTP transport, so tests can drive it with scripted responses.

use async_trait::async_trait;
use shared::catalog::{
    CategoryListResponse, ProductCountResponse, ProductFilterRequest, ProductListResponse,
};
use shared::models::{Category, Product};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

/// Catalog queries the browsing state machine issues
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of the unfiltered listing
    async fn product_page(&self, page: u32) -> ClientResult<Vec<Product>>;

    /// Total number of products in the unfiltered catalog
    async fn product_count(&self) -> ClientResult<u64>;

    /// Full match set for a facet selection, unpaginated
    async fn filtered_products(
        &self,
        filter: &ProductFilterRequest,
    ) -> ClientResult<Vec<Product>>;

    /// All categories, for rendering facet options
    async fn categories(&self) -> ClientResult<Vec<Category>>;
}

#[async_trait]
impl CatalogApi for HttpClient {
    async fn product_page(&self, page: u32) -> ClientResult<Vec<Product>> {
        let response: ProductListResponse = self
            .get(&format!("api/v1/product/product-list/{}", page))
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product list refused".to_string()),
            ));
        }
        Ok(response.products)
    }

    async fn product_count(&self) -> ClientResult<u64> {
        let response: ProductCountResponse = self.get("api/v1/product/product-count").await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product count refused".to_string()),
            ));
        }
        Ok(response.total)
    }

    async fn filtered_products(
        &self,
        filter: &ProductFilterRequest,
    ) -> ClientResult<Vec<Product>> {
        let response: ProductListResponse = self
            .post("api/v1/product/product-filters", filter)
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product filter refused".to_string()),
            ));
        }
        Ok(response.products)
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        let response: CategoryListResponse = self.get("api/v1/category/get-category").await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Category list refused".to_string()),
            ));
        }
        Ok(response.category)
    }
}
