//! reqwest implementation of the remote product API.

use catalog_core::{Product, ProductId};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::ProductApi;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP transport for `{base_url}/products`.
///
/// No timeout is configured; a hung connection hangs the call.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ClientConfig::default().with_base_url(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Fail on non-2xx, then decode the JSON body.
    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let resp = Self::check_status(resp).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        })
    }
}

#[async_trait::async_trait]
impl ProductApi for HttpProductApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Sending request");
        let resp = self.http.get(self.products_url()).send().await?;
        Self::read_json(resp).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        debug!("Sending request");
        let resp = self.http.get(self.product_url(id)).send().await?;
        Self::read_json(resp).await
    }

    #[instrument(skip(self, product))]
    async fn create_product(&self, product: &Product) -> Result<Product, ApiError> {
        debug!("Sending request");
        // `.json()` sets `Content-Type: application/json`.
        let resp = self.http.post(self.products_url()).json(product).send().await?;
        Self::read_json(resp).await
    }

    #[instrument(skip(self, product))]
    async fn update_product(&self, id: ProductId, product: &Product) -> Result<Product, ApiError> {
        debug!("Sending request");
        let resp = self.http.put(self.product_url(id)).json(product).send().await?;
        Self::read_json(resp).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        debug!("Sending request");
        let resp = self.http.delete(self.product_url(id)).send().await?;
        // Body (if any) is ignored.
        Self::check_status(resp).await.map(|_| ())
    }
}
