//! `catalog-view`
//!
//! **Responsibility:** screen state for the catalog browser.
//!
//! Holds the displayed products, the known categories, the active category
//! filter and the create/update forms, and turns user actions into
//! `CatalogClient` calls. Rendering is left to whatever view layer sits on top.

pub mod form;
pub mod state;

pub use form::{FieldError, FormField, FormKind, ProductForm};
pub use state::{CatalogView, SubmitOutcome};
