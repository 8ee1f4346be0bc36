//! # Client Configuration
//!
//! Configuration for the REST client and token persistence.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit values passed by the composition root
//! 2. Environment variables (`SHOPFRONT_*`)
//! 3. Defaults (this file)
//!
//! ## Two Base URLs
//! The backend exposes its admin and login endpoints on a configured API
//! host while the remaining endpoints are served from the storefront
//! origin. The split is inherited from the backend contract and is kept
//! as two distinct fields rather than papered over; see DESIGN.md.

use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP timeout for all requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the admin product CRUD and login endpoints.
    /// e.g. "https://api.shopfront.example"
    pub api_base_url: String,

    /// Base URL for the remaining endpoints (orders, register, profile).
    /// e.g. "https://shopfront.example"
    pub origin_base_url: String,

    /// Explicit path for the persisted token file. When `None`, the
    /// platform data directory is used (see [`crate::token::TokenStore`]).
    pub token_path: Option<PathBuf>,

    /// HTTP timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    /// Returns a default configuration suitable for local development.
    fn default() -> Self {
        ClientConfig {
            api_base_url: "http://localhost:8000".to_string(),
            origin_base_url: "http://localhost:8000".to_string(),
            token_path: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_API_URL`: base for admin/login endpoints
    /// - `SHOPFRONT_ORIGIN_URL`: base for the remaining endpoints
    ///   (falls back to `SHOPFRONT_API_URL` when unset)
    /// - `SHOPFRONT_TOKEN_PATH`: override for the token file location
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();

        if let Ok(api_base) = std::env::var("SHOPFRONT_API_URL") {
            config.api_base_url = api_base.clone();
            config.origin_base_url = api_base;
        }

        if let Ok(origin_base) = std::env::var("SHOPFRONT_ORIGIN_URL") {
            config.origin_base_url = origin_base;
        }

        if let Ok(token_path) = std::env::var("SHOPFRONT_TOKEN_PATH") {
            config.token_path = Some(PathBuf::from(token_path));
        }

        config
    }

    /// Sets both base URLs to the same host. Convenient for tests and
    /// single-host deployments.
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.api_base_url = base.clone();
        self.origin_base_url = base;
        self
    }

    /// Sets an explicit token file path.
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.origin_base_url, config.api_base_url);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.token_path.is_none());
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9000")
            .with_token_path("/tmp/shopfront-token");

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.origin_base_url, "http://127.0.0.1:9000");
        assert_eq!(
            config.token_path.as_deref(),
            Some(std::path::Path::new("/tmp/shopfront-token"))
        );
    }
}
