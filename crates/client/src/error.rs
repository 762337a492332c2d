//! Transport-level error for raw API calls.

use thiserror::Error;

/// Failure of a single remote call.
///
/// Only visible through `ProductApi`; `CatalogClient` logs and absorbs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("catalog API unavailable")]
    Unavailable,
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::Status {
            status: 404,
            body: what.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
