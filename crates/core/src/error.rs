//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog model.
pub type DomainResult<T> = Result<T, DomainError>;

/// Local, deterministic failures (validation and missing identity).
///
/// These never come from the network. Transport failures are a client concern
/// and are absorbed there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty title, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation that targets an existing product was given one without an id.
    #[error("product id is undefined")]
    MissingId,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
