//! # shopfront-core: Pure State Container for the Shopfront Storefront
//!
//! This crate is the **heart** of the Shopfront client. It holds the five
//! pieces of storefront state and every synchronous mutation over them, as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Shopfront Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    UI / Composition Root                      │ │
//! │  │     product grid ──► cart panel ──► checkout ──► account      │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │ Store actions                     │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              shopfront-client (REST + persistence)            │ │
//! │  │     fetch_products, login, add_to_cart, logout, ...           │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ shopfront-core (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐  ┌──────────┐  ┌───────────┐  ┌────────────┐  │ │
//! │  │   │  types   │  │   cart   │  │   state   │  │ validation │  │ │
//! │  │   │ Product  │  │  Cart    │  │StoreState │  │   rules    │  │ │
//! │  │   │  Order   │  │ CartLine │  │ mutations │  │   checks   │  │ │
//! │  │   └──────────┘  └──────────┘  └───────────┘  └────────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO NETWORK • NO FILESYSTEM • PURE FUNCTIONS        │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, User, credentials)
//! - [`cart`] - Cart lines and cart mutation logic
//! - [`state`] - The store state, its mutations, and derived views
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every mutation is deterministic and synchronous
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: validation failures are typed, never strings

pub mod cart;
pub mod error;
pub mod state;
pub mod types;
pub mod validation;

// Re-exports for convenience: `use shopfront_core::Cart` instead of
// `use shopfront_core::cart::Cart`.
pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use state::{AuthStatus, StoreState};
pub use types::{Credentials, Order, Product, ProductInput, Registration, User};
