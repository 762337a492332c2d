//! Catalog client: remote product access with failure absorption.
//!
//! Every operation settles to a value. A transport or server failure is logged
//! (operation name + message) and replaced by the operation's default:
//!
//! | Operation kind | Default on failure |
//! |---|---|
//! | list reads | empty `Vec` |
//! | single read / create / update | `None` |
//! | delete | `()` |
//!
//! The view layer therefore never needs its own error branch for the network.

use std::sync::Arc;

use catalog_core::{DomainError, Product, ProductId, SortKey, SortOrder, listing};
use tracing::{error, instrument, warn};

use crate::api::ProductApi;
use crate::config::{ClientConfig, DEFAULT_LIMIT};
use crate::error::ApiError;
use crate::http::HttpProductApi;

/// Explicitly constructed handle to the product API; cheap to clone.
#[derive(Clone)]
pub struct CatalogClient {
    api: Arc<dyn ProductApi>,
    default_limit: usize,
}

impl core::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("default_limit", &self.default_limit)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// HTTP-backed client for `config.base_url`.
    pub fn http(config: &ClientConfig) -> Self {
        Self::new(Arc::new(HttpProductApi::from_config(config))).with_default_limit(config.default_limit)
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// All products, in server order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Vec<Product> {
        absorb("list_products", self.api.list_products().await)
    }

    /// One product, or `None` when it is missing or the call failed.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Option<Product> {
        absorb("get_product", self.api.get_product(id).await.map(Some))
    }

    /// The first `limit` products, in server order.
    pub async fn list_limited(&self, limit: usize) -> Vec<Product> {
        listing::limited(self.list_products().await, limit)
    }

    /// `list_limited` with the configured default limit.
    pub async fn list_limited_default(&self) -> Vec<Product> {
        self.list_limited(self.default_limit).await
    }

    /// All products ordered by `key` (stable).
    pub async fn list_sorted(&self, key: SortKey, order: SortOrder) -> Vec<Product> {
        let products = self.list_products().await;
        listing::sorted(&products, key, order)
    }

    /// Distinct categories in first-seen order.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Vec<String> {
        let products = absorb("list_categories", self.api.list_products().await);
        listing::distinct_categories(&products)
    }

    /// Products in exactly `category` (case-sensitive).
    pub async fn list_by_category(&self, category: &str) -> Vec<Product> {
        listing::in_category(self.list_products().await, category)
    }

    /// Create a product. Any id on the input is dropped before sending.
    ///
    /// A product that fails local validation is rejected without a request.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn create_product(&self, product: &Product) -> Option<Product> {
        if let Err(e) = product.validate() {
            reject_locally("create_product", &e);
            return None;
        }
        absorb("create_product", self.api.create_product(&product.without_id()).await.map(Some))
    }

    /// Replace the product stored under `id`.
    ///
    /// Rejected locally when the product is invalid or carries a different id.
    #[instrument(skip(self, product))]
    pub async fn update_product(&self, id: ProductId, product: &Product) -> Option<Product> {
        if let Some(other) = product.id.filter(|other| *other != id) {
            let e = DomainError::invalid_id(format!("body id {other} does not match {id}"));
            reject_locally("update_product", &e);
            return None;
        }
        if let Err(e) = product.validate() {
            reject_locally("update_product", &e);
            return None;
        }
        let body = product.clone().with_id(id);
        absorb("update_product", self.api.update_product(id, &body).await.map(Some))
    }

    /// Delete a product. Failures are logged and otherwise indistinguishable
    /// from success.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) {
        absorb("delete_product", self.api.delete_product(id).await)
    }
}

/// Unwrap `result`, or log the failure and fall back to `T::default()`.
fn absorb<T: Default>(operation: &'static str, result: Result<T, ApiError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(operation, error = %e, "catalog request failed");
            T::default()
        }
    }
}

fn reject_locally(operation: &'static str, e: &DomainError) {
    warn!(operation, error = %e, "catalog request rejected locally");
}
