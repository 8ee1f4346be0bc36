//! # Domain Types
//!
//! Core domain types shared by the state container and the REST client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │     Order      │   │      User      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (i64)      │   │  id (i64)      │   │  id (i64)      │      │
//! │  │  name          │   │  details       │   │  name          │      │
//! │  │  price_cents   │   │  (opaque map)  │   │  email         │      │
//! │  │  image_url     │   │                │   │  is_admin      │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  Request payloads: ProductInput, Credentials, Registration          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Monetary values are integer cents throughout. The backend speaks
//! snake_case JSON (Laravel convention), so no field renaming is needed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Owned by the catalog list; the whole list is replaced on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the backend.
    pub id: i64,

    /// Display name shown in the product grid.
    pub name: String,

    /// Optional long-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Optional image URL for the product card.
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Product Input
// =============================================================================

/// Payload for creating or updating a product.
///
/// The backend assigns the id; callers never supply one. Validate with
/// [`crate::validation::validate_product_input`] before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// An order record created server-side.
///
/// Orders are opaque to the client: beyond the id, whatever the server
/// returned is carried verbatim in `details` and handed back to the UI
/// untouched. The local order list is append-only between fetches and
/// replaced wholesale on fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier assigned by the backend.
    pub id: i64,

    /// Everything else the server sent (totals, line items, status, ...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

// =============================================================================
// User
// =============================================================================

/// The authenticated principal, present only after a profile fetch resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,

    /// Grants access to the admin product CRUD surface.
    #[serde(default)]
    pub is_admin: bool,
}

// =============================================================================
// Auth Payloads
// =============================================================================

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
