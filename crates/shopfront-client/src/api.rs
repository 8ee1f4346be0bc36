//! # API Client
//!
//! One method per backend REST endpoint. The bearer token is an explicit
//! parameter on every authenticated call; there is no process-global
//! default header, so nothing outside the calling layer can change which
//! credential a request carries.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                                   Auth    Base        │
//! │  ──────  ─────────────────────────────────────  ──────  ──────────  │
//! │  GET     /admin/products                        bearer  api_base    │
//! │  POST    /admin/products                        bearer  api_base    │
//! │  POST    /admin/products/{id}?_method=PUT       bearer  api_base    │
//! │  DELETE  /admin/products/{id}                   bearer  api_base    │
//! │  POST    /login                                 none    api_base    │
//! │  GET     /api/orders                            bearer  origin_base │
//! │  POST    /api/orders                            bearer  origin_base │
//! │  POST    /api/auth/register                     none    origin_base │
//! │  GET     /api/auth/user                         bearer  origin_base │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The update endpoint tunnels PUT through POST with a `_method` query
//! override, the backend's form-compatible convention, kept as-is.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use shopfront_core::{Credentials, Order, Product, ProductInput, Registration, User};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Response DTOs
// =============================================================================
// The two auth endpoints name their token field differently. That is the
// backend contract; both are mapped to a plain token string here.

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    token: String,
}

// =============================================================================
// API Client
// =============================================================================

/// REST client for the storefront backend.
///
/// Cheap to clone; the underlying `reqwest::Client` is a shared pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    origin_base: String,
}

impl ApiClient {
    /// Builds a client from the given configuration.
    ///
    /// ## Errors
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(ApiClient {
            http,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
            origin_base: config.origin_base_url.trim_end_matches('/').to_string(),
        })
    }

    // =========================================================================
    // Products (admin surface)
    // =========================================================================

    /// Fetches the full product catalog.
    pub async fn fetch_products(&self, bearer: Option<&str>) -> ClientResult<Vec<Product>> {
        let url = format!("{}/admin/products", self.api_base);
        debug!(%url, "GET products");

        let request = authorize(self.http.get(&url), bearer);
        decode(request.send().await?).await
    }

    /// Creates a product. Returns the server-assigned record.
    pub async fn create_product(
        &self,
        bearer: Option<&str>,
        input: &ProductInput,
    ) -> ClientResult<Product> {
        let url = format!("{}/admin/products", self.api_base);
        debug!(%url, name = %input.name, "POST product");

        let request = authorize(self.http.post(&url), bearer).json(input);
        decode(request.send().await?).await
    }

    /// Updates a product via the backend's PUT-as-POST override.
    pub async fn update_product(
        &self,
        bearer: Option<&str>,
        product_id: i64,
        input: &ProductInput,
    ) -> ClientResult<Product> {
        let url = format!("{}/admin/products/{}", self.api_base, product_id);
        debug!(%url, "POST product (method override PUT)");

        let request = authorize(self.http.post(&url), bearer)
            .query(&[("_method", "PUT")])
            .json(input);
        decode(request.send().await?).await
    }

    /// Deletes a product. The response body, if any, is discarded.
    pub async fn delete_product(&self, bearer: Option<&str>, product_id: i64) -> ClientResult<()> {
        let url = format!("{}/admin/products/{}", self.api_base, product_id);
        debug!(%url, "DELETE product");

        let response = authorize(self.http.delete(&url), bearer).send().await?;
        check_status(response).await?;
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Fetches the order history.
    pub async fn fetch_orders(&self, bearer: Option<&str>) -> ClientResult<Vec<Order>> {
        let url = format!("{}/api/orders", self.origin_base);
        debug!(%url, "GET orders");

        let request = authorize(self.http.get(&url), bearer);
        decode(request.send().await?).await
    }

    /// Places an order. The payload is opaque to the client; the server
    /// returns the created record.
    pub async fn create_order(&self, bearer: Option<&str>, payload: &Value) -> ClientResult<Order> {
        let url = format!("{}/api/orders", self.origin_base);
        debug!(%url, "POST order");

        let request = authorize(self.http.post(&url), bearer).json(payload);
        decode(request.send().await?).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Registers a new account. Returns the bearer token (`token` field).
    pub async fn register(&self, registration: &Registration) -> ClientResult<String> {
        let url = format!("{}/api/auth/register", self.origin_base);
        debug!(%url, email = %registration.email, "POST register");

        let response = self.http.post(&url).json(registration).send().await?;
        let body: RegisterResponse = decode(response).await?;
        Ok(body.token)
    }

    /// Logs in. Returns the bearer token (`access_token` field).
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<String> {
        let url = format!("{}/login", self.api_base);
        debug!(%url, email = %credentials.email, "POST login");

        let response = self.http.post(&url).json(credentials).send().await?;
        let body: LoginResponse = decode(response).await?;
        Ok(body.access_token)
    }

    /// Fetches the authenticated user's profile.
    pub async fn fetch_user(&self, bearer: Option<&str>) -> ClientResult<User> {
        let url = format!("{}/api/auth/user", self.origin_base);
        debug!(%url, "GET user");

        let request = authorize(self.http.get(&url), bearer);
        decode(request.send().await?).await
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Attaches the bearer token when one is present.
fn authorize(request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    match bearer {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Maps a non-success status to `ClientError::Api`, passing the body
/// through as the message. Transport and server failures are otherwise
/// not distinguished by callers.
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Checks the status, then decodes the JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
