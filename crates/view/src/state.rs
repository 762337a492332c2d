//! Catalog view state: what is currently shown, and the user actions that
//! change it.

use catalog_client::CatalogClient;
use catalog_core::{DomainError, Product, ProductId};
use tracing::{debug, error, info, instrument};

use crate::form::ProductForm;

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form was invalid; nothing was sent.
    Skipped,
    /// A local check failed; nothing was sent.
    Rejected(DomainError),
    /// The request was sent. `None` when the client absorbed a failure.
    Submitted(Option<Product>),
}

/// Per-session state driving the catalog screen.
///
/// Methods take `&mut self` and run to completion one at a time. Each refresh
/// replaces `products` wholesale.
#[derive(Debug)]
pub struct CatalogView {
    client: CatalogClient,
    products: Vec<Product>,
    categories: Vec<String>,
    selected_category: String,
    create_form: ProductForm,
    update_form: ProductForm,
}

impl CatalogView {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            categories: Vec::new(),
            selected_category: String::new(),
            create_form: ProductForm::create(),
            update_form: ProductForm::update(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Active filter; empty means "no filter".
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn create_form(&self) -> &ProductForm {
        &self.create_form
    }

    pub fn create_form_mut(&mut self) -> &mut ProductForm {
        &mut self.create_form
    }

    pub fn update_form(&self) -> &ProductForm {
        &self.update_form
    }

    pub fn update_form_mut(&mut self) -> &mut ProductForm {
        &mut self.update_form
    }

    /// Load categories, then products.
    #[instrument(skip(self))]
    pub async fn init(&mut self) {
        self.load_categories().await;
        self.refresh_products().await;
        info!(
            categories = self.categories.len(),
            products = self.products.len(),
            "catalog view initialized"
        );
    }

    pub async fn load_categories(&mut self) {
        self.categories = self.client.list_categories().await;
    }

    /// Re-fetch the displayed list for the current filter.
    pub async fn refresh_products(&mut self) {
        self.products = if self.selected_category.is_empty() {
            self.client.list_limited_default().await
        } else {
            self.client.list_by_category(&self.selected_category).await
        };
    }

    pub async fn change_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        debug!(category = %self.selected_category, "category changed");
        self.refresh_products().await;
    }

    #[instrument(skip(self))]
    pub async fn submit_create(&mut self) -> SubmitOutcome {
        if !self.create_form.is_valid() {
            debug!(errors = ?self.create_form.errors(), "create form invalid; skipping");
            return SubmitOutcome::Skipped;
        }

        let product = self.create_form.to_product();
        let created = self.client.create_product(&product).await;

        self.refresh_products().await;
        self.create_form.reset();
        SubmitOutcome::Submitted(created)
    }

    #[instrument(skip(self))]
    pub async fn submit_update(&mut self) -> SubmitOutcome {
        if !self.update_form.is_valid() {
            debug!(errors = ?self.update_form.errors(), "update form invalid; skipping");
            return SubmitOutcome::Skipped;
        }

        let product = self.update_form.to_product();
        // Form validity already requires an id; this guards the network call.
        let id = match product.require_id() {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "refusing to send update");
                return SubmitOutcome::Rejected(e);
            }
        };

        let updated = self.client.update_product(id, &product).await;

        self.refresh_products().await;
        self.update_form.reset();
        SubmitOutcome::Submitted(updated)
    }

    /// Load product `id` into the update form. Returns `false` (form untouched)
    /// when the product could not be fetched.
    #[instrument(skip(self))]
    pub async fn edit_product(&mut self, id: ProductId) -> bool {
        match self.client.get_product(id).await {
            Some(product) => {
                self.update_form.fill_from(&product);
                true
            }
            None => false,
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&mut self, id: ProductId) {
        self.client.delete_product(id).await;
        self.refresh_products().await;
    }
}
