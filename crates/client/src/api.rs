use catalog_core::{Product, ProductId};

use crate::error::ApiError;

/// Raw remote product API.
///
/// One method per endpoint, no policy: every failure is returned as-is.
/// `CatalogClient` is the only intended consumer.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `POST /products`; the body carries no id.
    async fn create_product(&self, product: &Product) -> Result<Product, ApiError>;

    /// `PUT /products/{id}`; full replacement.
    async fn update_product(&self, id: ProductId, product: &Product) -> Result<Product, ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}
