//! # Client Error Types
//!
//! Error types for HTTP actions, token persistence, and configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Client Error Categories                         │
//! │                                                                     │
//! │  ┌───────────────┐  ┌────────────────┐  ┌───────────────────────┐  │
//! │  │  Transport    │  │   Server       │  │   Local               │  │
//! │  │               │  │                │  │                       │  │
//! │  │  Http         │  │  Api           │  │  TokenStore           │  │
//! │  │  (reqwest)    │  │  {status, msg} │  │  InvalidConfig        │  │
//! │  │               │  │  Decode        │  │  Validation           │  │
//! │  └───────────────┘  └────────────────┘  └───────────────────────┘  │
//! │                                                                     │
//! │  Transport failures and server error statuses share one generic     │
//! │  failure path per action: no retries, no partial recovery.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use shopfront_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type covering HTTP, persistence, and config failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level HTTP failure (connect, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Reading or writing the persisted token failed.
    #[error("Token store error: {0}")]
    TokenStore(#[from] std::io::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Payload rejected before any request was issued.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// True when this failure never reached the network (local rejection).
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::TokenStore(_)
                | ClientError::InvalidConfig(_)
                | ClientError::Validation(_)
        )
    }
}
