//! `catalog-client`
//!
//! **Responsibility:** sole point of contact with the remote product API.
//!
//! This crate provides:
//! - A transport seam (`ProductApi`) with an HTTP and an in-memory implementation
//! - `CatalogClient`, which absorbs transport failures into safe defaults
//! - Environment-driven configuration
//!
//! Callers of `CatalogClient` never see a transport error: reads degrade to an
//! empty list or `None`, writes to `None` or unit, and every failure is logged.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod in_memory;

pub use api::ProductApi;
pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpProductApi;
pub use in_memory::InMemoryProductApi;
