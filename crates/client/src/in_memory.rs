use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use catalog_core::{Product, ProductId};

use crate::api::ProductApi;
use crate::error::ApiError;

/// In-process product API.
///
/// Intended for tests/dev. Assigns ids sequentially, can be switched into a
/// failing mode, and counts every call it receives.
#[derive(Debug)]
pub struct InMemoryProductApi {
    products: RwLock<Vec<Product>>,
    next_id: AtomicU64,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl Default for InMemoryProductApi {
    fn default() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }
}

impl InMemoryProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with products; those without an id get one assigned.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut seeded: Vec<Product> = products.into_iter().collect();
        let mut next_id = seeded.iter().filter_map(|p| p.id).map(ProductId::get).max().unwrap_or(0) + 1;
        for product in seeded.iter_mut().filter(|p| p.id.is_none()) {
            product.id = Some(ProductId::new(next_id));
            next_id += 1;
        }
        Self {
            products: RwLock::new(seeded),
            next_id: AtomicU64::new(next_id),
            ..Self::default()
        }
    }

    /// When `true`, every call fails with `ApiError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of API calls received so far (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Current stored products, in insertion order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.read().map(|p| p.clone()).unwrap_or_default()
    }

    fn allocate_id(&self) -> ProductId {
        ProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn enter(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn poisoned<T>(_: T) -> ApiError {
        ApiError::Transport("lock poisoned".to_string())
    }
}

#[async_trait::async_trait]
impl ProductApi for InMemoryProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.enter()?;
        self.products.read().map(|p| p.clone()).map_err(Self::poisoned)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.enter()?;
        let products = self.products.read().map_err(Self::poisoned)?;
        products
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("product {id} not found")))
    }

    async fn create_product(&self, product: &Product) -> Result<Product, ApiError> {
        self.enter()?;
        let created = product.clone().with_id(self.allocate_id());
        let mut products = self.products.write().map_err(Self::poisoned)?;
        products.push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, id: ProductId, product: &Product) -> Result<Product, ApiError> {
        self.enter()?;
        let mut products = self.products.write().map_err(Self::poisoned)?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| ApiError::not_found(format!("product {id} not found")))?;
        *slot = product.clone().with_id(id);
        Ok(slot.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.enter()?;
        let mut products = self.products.write().map_err(Self::poisoned)?;
        let before = products.len();
        products.retain(|p| p.id != Some(id));
        if products.len() == before {
            return Err(ApiError::not_found(format!("product {id} not found")));
        }
        Ok(())
    }
}
