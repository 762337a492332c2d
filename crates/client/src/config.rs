//! Client configuration (environment-driven).

/// Base URL used when `CATALOG_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Number of products shown when no category is selected.
pub const DEFAULT_LIMIT: usize = 5;

pub const BASE_URL_ENV: &str = "CATALOG_API_BASE_URL";
pub const DEFAULT_LIMIT_ENV: &str = "CATALOG_DEFAULT_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash; endpoints are `{base_url}/products...`.
    pub base_url: String,
    pub default_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or malformed values fall back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(url) => config = config.with_base_url(url),
            None => tracing::warn!(
                "{BASE_URL_ENV} not set; using default {DEFAULT_BASE_URL}"
            ),
        }

        if let Some(raw) = lookup(DEFAULT_LIMIT_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.default_limit = limit,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "invalid {DEFAULT_LIMIT_ENV}; using default {DEFAULT_LIMIT}"
                ),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}
