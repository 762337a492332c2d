//! Product edit forms: raw field values plus per-field validity.
//!
//! A form is a plain value. Every `set` re-runs validation for the touched
//! field, so `is_valid()` always reflects the current inputs.

use std::collections::BTreeMap;

use catalog_core::{Product, ProductId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Id,
    Title,
    Description,
    Price,
    Category,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("must be a number")]
    NotANumber,
    #[error("must not be negative")]
    Negative,
}

/// Which submission a form feeds. Update forms carry the product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Update,
}

const CREATE_FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::Description,
    FormField::Price,
    FormField::Category,
    FormField::Image,
];

const UPDATE_FIELDS: &[FormField] = &[
    FormField::Id,
    FormField::Title,
    FormField::Description,
    FormField::Price,
    FormField::Category,
    FormField::Image,
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    kind: FormKind,
    values: BTreeMap<FormField, String>,
    errors: BTreeMap<FormField, FieldError>,
}

impl ProductForm {
    pub fn new(kind: FormKind) -> Self {
        let mut form = Self {
            kind,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        };
        form.reset();
        form
    }

    pub fn create() -> Self {
        Self::new(FormKind::Create)
    }

    pub fn update() -> Self {
        Self::new(FormKind::Update)
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Fields this form exposes, in display order.
    pub fn fields(&self) -> &'static [FormField] {
        match self.kind {
            FormKind::Create => CREATE_FIELDS,
            FormKind::Update => UPDATE_FIELDS,
        }
    }

    /// Set a raw input value and re-validate that field.
    ///
    /// Fields the form does not expose (`Id` on a create form) are ignored.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        if !self.fields().contains(&field) {
            return;
        }
        self.values.insert(field, value.into());
        self.revalidate(field);
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<FormField, FieldError> {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Restore construction defaults: price `0`, everything else empty.
    pub fn reset(&mut self) {
        self.values = self
            .fields()
            .iter()
            .map(|f| {
                let default = if *f == FormField::Price { "0" } else { "" };
                (*f, default.to_string())
            })
            .collect();
        self.revalidate_all();
    }

    /// Load an existing product into the form.
    pub fn fill_from(&mut self, product: &Product) {
        let id = product.id.map(|id| id.to_string()).unwrap_or_default();
        self.set(FormField::Id, id);
        self.set(FormField::Title, product.title.as_str());
        self.set(FormField::Description, product.description.as_str());
        self.set(FormField::Price, product.price.to_string());
        self.set(FormField::Category, product.category.as_str());
        self.set(FormField::Image, product.image.as_str());
    }

    /// Parsed id; always `None` on a create form.
    pub fn id(&self) -> Option<ProductId> {
        match self.kind {
            FormKind::Create => None,
            FormKind::Update => self.value(FormField::Id).parse().ok(),
        }
    }

    /// Parsed price, if the field holds a number.
    pub fn price(&self) -> Option<f64> {
        parse_price(self.value(FormField::Price)).ok()
    }

    /// Build the product described by the form. An unset price becomes `0`.
    pub fn to_product(&self) -> Product {
        let product = Product::new(
            self.value(FormField::Title),
            self.value(FormField::Description),
            self.price().unwrap_or(0.0),
            self.value(FormField::Category),
            self.value(FormField::Image),
        );
        match self.id() {
            Some(id) => product.with_id(id),
            None => product,
        }
    }

    /// Drop all field errors without touching the values.
    #[cfg(test)]
    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }

    fn revalidate_all(&mut self) {
        self.errors.clear();
        for field in self.fields() {
            self.revalidate(*field);
        }
    }

    fn revalidate(&mut self, field: FormField) {
        match check(field, self.value(field)) {
            Some(e) => self.errors.insert(field, e),
            None => self.errors.remove(&field),
        };
    }
}

fn check(field: FormField, raw: &str) -> Option<FieldError> {
    match field {
        FormField::Id if raw.trim().is_empty() => Some(FieldError::Required),
        FormField::Id => raw.parse::<ProductId>().err().map(|_| FieldError::NotANumber),
        FormField::Title | FormField::Description | FormField::Category if raw.is_empty() => {
            Some(FieldError::Required)
        }
        FormField::Price => parse_price(raw).err(),
        _ => None,
    }
}

fn parse_price(raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    let price = raw
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or(FieldError::NotANumber)?;
    if price < 0.0 {
        return Err(FieldError::Negative);
    }
    Ok(price)
}
