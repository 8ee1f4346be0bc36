//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  shopfront-core errors (this file)                                  │
//! │  ├── CoreError        - Domain/state errors                         │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  shopfront-client errors (separate crate)                           │
//! │  └── ClientError      - HTTP, persistence, config failures          │
//! │                                                                     │
//! │  Flow: ValidationError ──► ClientError ──► caller                   │
//! │        CoreError ──► handled at the action layer, never propagated  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core state-container errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The product is already in the cart.
    ///
    /// Raised by [`crate::state::StoreState::add_to_cart`]: a product
    /// already present must not be mutated, only reported.
    #[error("Product {0} is already in the cart")]
    AlreadyInCart(i64),

    /// Product cannot be found in the catalog.
    ///
    /// Raised by [`crate::state::StoreState::update_product`] when no
    /// catalog entry matches the updated record's id.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a payload does not meet requirements. Used for early
/// validation before any HTTP request is issued.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or positive.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
