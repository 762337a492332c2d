//! `catalog-core`: product catalog building blocks.
//!
//! This crate contains the **pure** catalog model and list operations (no IO,
//! no HTTP). Everything network-facing lives in `catalog-client`.

pub mod error;
pub mod id;
pub mod listing;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use listing::{SortKey, SortOrder, distinct_categories, in_category, limited, sorted};
pub use product::{Product, Rating};
