//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::catalog::{
    AdminAuthResponse, AdminMutationResponse, CategoryProductsResponse, ProductResponse,
};
use shared::models::{Category, Product, ProductCreate, ProductUpdate};

/// HTTP client for making network requests to the storefront API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self.client.delete(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Check whether the configured token passes the admin gate
    pub async fn admin_auth_check(&self) -> ClientResult<bool> {
        let response: AdminAuthResponse = self.get("api/v1/auth/admin-auth").await?;
        Ok(response.ok)
    }

    // ========== Product Pages ==========

    /// Fetch one product by slug
    pub async fn product_by_slug(&self, slug: &str) -> ClientResult<Product> {
        let response: ProductResponse = self
            .get(&format!("api/v1/product/get-product/{}", slug))
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product fetch refused".to_string()),
            ));
        }

        response
            .product
            .ok_or_else(|| ClientError::InvalidResponse("Missing product data".to_string()))
    }

    /// Fetch a category and its full product set
    pub async fn products_by_category(&self, slug: &str) -> ClientResult<(Category, Vec<Product>)> {
        let response: CategoryProductsResponse = self
            .get(&format!("api/v1/product/product-category/{}", slug))
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Category fetch refused".to_string()),
            ));
        }

        let category = response
            .category
            .ok_or_else(|| ClientError::InvalidResponse("Missing category data".to_string()))?;
        Ok((category, response.products))
    }

    // ========== Admin Product API ==========

    /// Create a catalog entry
    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<()> {
        let response: AdminMutationResponse =
            self.post("api/v1/product/create-product", payload).await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product create refused".to_string()),
            ));
        }
        Ok(())
    }

    /// Update a catalog entry by id
    pub async fn update_product(&self, id: &str, payload: &ProductUpdate) -> ClientResult<()> {
        let response: AdminMutationResponse = self
            .put(&format!("api/v1/product/update-product/{}", id), payload)
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product update refused".to_string()),
            ));
        }
        Ok(())
    }

    /// Delete a catalog entry by id
    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        let response: AdminMutationResponse = self
            .delete(&format!("api/v1/product/delete-product/{}", id))
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Product delete refused".to_string()),
            ));
        }
        Ok(())
    }
}
