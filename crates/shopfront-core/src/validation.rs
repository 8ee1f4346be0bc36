//! # Validation Module
//!
//! Input validation for payloads headed to the backend.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: UI form checks (immediate feedback)                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - before any HTTP request is issued           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Backend (authoritative; 422 on violation)                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::validate_product_input;
//! use shopfront_core::ProductInput;
//!
//! let input = ProductInput {
//!     name: "Mug".to_string(),
//!     description: None,
//!     price_cents: 1250,
//!     image_url: None,
//! };
//! validate_product_input(&input).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{Credentials, ProductInput, Registration};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum product name length accepted by the backend.
pub const MAX_NAME_LEN: usize = 200;

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product create/update payload.
///
/// ## Rules
/// - Name must not be empty and must be at most 200 characters
/// - Price must not be negative (zero is allowed for giveaways)
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    let name = input.name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if input.price_cents < 0 {
        return Err(ValidationError::Negative {
            field: "price_cents".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Auth Validators
// =============================================================================

/// Validates login credentials.
///
/// ## Rules
/// - Email must not be empty and must contain exactly one '@'
/// - Password must be present
///
/// The password length rule applies only at registration; existing
/// accounts may predate it.
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult<()> {
    validate_email(&credentials.email)?;

    if credentials.password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

/// Validates a registration payload.
///
/// ## Rules
/// - Name must not be empty
/// - Email rules as in [`validate_credentials`]
/// - Password must be at least 8 characters
pub fn validate_registration(registration: &Registration) -> ValidationResult<()> {
    if registration.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    validate_email(&registration.email)?;
    validate_password(&registration.password)
}

fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    // Not RFC 5322; the backend is authoritative. This catches typos early.
    let at_count = email.chars().filter(|c| *c == '@').count();
    if at_count != 1 || email.starts_with('@') || email.ends_with('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain a local part and a domain".to_string(),
        });
    }

    Ok(())
}

fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
