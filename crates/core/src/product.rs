use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::ProductId;

/// Customer rating summary attached to a product by the remote API.
///
/// Either field may be missing or `null` upstream; both then read as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
}

impl Rating {
    pub fn new(rate: f64, count: u32) -> Self {
        Self { rate, count }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A catalog product as exchanged with the remote API.
///
/// `id` is absent until the API assigns one. Once assigned it is never changed
/// locally; updates and deletes address the product by that id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Opaque image URL; never validated.
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a not-yet-persisted product (no id, no rating).
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            price,
            category: category.into(),
            image: image.into(),
            rating: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating used for ordering; a missing rating counts as `0`.
    pub fn rate(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }

    /// Returns the id, or `MissingId` when the product was never persisted.
    pub fn require_id(&self) -> DomainResult<ProductId> {
        self.id.ok_or(DomainError::MissingId)
    }

    /// Copy of this product suitable for a create request.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    /// Check the local invariants: required text present, price `>= 0`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if self.description.is_empty() {
            return Err(DomainError::validation("description is required"));
        }
        if self.category.is_empty() {
            return Err(DomainError::validation("category is required"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number (got {})",
                self.price
            )));
        }
        Ok(())
    }
}
