//! Client configuration

use std::sync::Arc;

use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::storage::KeyValueStore;

/// Used when no base URL was supplied at build time
pub const FALLBACK_BASE_URL: &str = "http://localhost:3000";

/// Base URL baked in at build time from `TAIYAKI_API_BASE_URL`, or
/// [`FALLBACK_BASE_URL`]
pub fn default_base_url() -> String {
    match option_env!("TAIYAKI_API_BASE_URL") {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => FALLBACK_BASE_URL.to_string(),
    }
}

/// Client configuration for connecting to the order backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000").
    /// A base URL persisted with [`HttpClient::set_base_url`] takes precedence.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self, store: Arc<dyn KeyValueStore>) -> ClientResult<HttpClient> {
        HttpClient::new(self, store)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_build_time_or_fallback() {
        let config = ClientConfig::default();
        match option_env!("TAIYAKI_API_BASE_URL") {
            Some(url) if !url.is_empty() => assert_eq!(config.base_url, url),
            _ => assert_eq!(config.base_url, FALLBACK_BASE_URL),
        }
    }

    #[test]
    fn builder_overrides_base_url() {
        let config = ClientConfig::default().with_base_url("http://shop.local:8080");
        assert_eq!(config.base_url, "http://shop.local:8080");
    }
}
