//! # Store State
//!
//! The five pieces of storefront state and every synchronous mutation
//! over them. This is the Rust counterpart of a frontend state container:
//! mutations are plain methods, derived views are plain getters that
//! recompute from current state on every access.
//!
//! ## State Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         StoreState                                  │
//! │                                                                     │
//! │  products: Vec<Product>   ◄── replaced wholesale on fetch           │
//! │  cart:     Cart           ◄── lines mutated individually            │
//! │  orders:   Vec<Order>     ◄── replaced on fetch, appended on place  │
//! │  user:     Option<User>   ◄── set after profile fetch, cleared on   │
//! │                               logout                                │
//! │  token:    String         ◄── "" means Anonymous                    │
//! │                                                                     │
//! │  Auth state machine:                                                │
//! │    Anonymous ──login/register──► Authenticated (provisional until   │
//! │        ▲                          user profile resolves)            │
//! │        └───────────logout─────────────┘  (unconditional)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Discipline
//! Every mutation is synchronous and touches exactly one piece of state
//! (plus the cart delegations). The client crate holds the lock around a
//! single mutation call, never across I/O, so each mutation is atomic
//! relative to concurrently running actions.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartTotals};
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, Product, User};

// =============================================================================
// Auth Status
// =============================================================================

/// The two authentication states of the store.
///
/// `Authenticated` is provisional from the moment a token is set until the
/// user profile fetch resolves; the `user` field distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// Empty token, absent user.
    Anonymous,
    /// Non-empty token; user may still be resolving.
    Authenticated,
}

// =============================================================================
// Store State
// =============================================================================

/// The storefront state container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    /// Product catalog, replaced wholesale on fetch.
    pub products: Vec<Product>,

    /// The shopping cart.
    pub cart: Cart,

    /// Order history, replaced on fetch and appended on placement.
    pub orders: Vec<Order>,

    /// Authenticated principal, if the profile fetch has resolved.
    pub user: Option<User>,

    /// Bearer token. Empty string means unauthenticated.
    pub token: String,
}

impl StoreState {
    /// Creates a new empty state (Anonymous, empty catalog and cart).
    pub fn new() -> Self {
        StoreState::default()
    }

    // =========================================================================
    // Catalog Mutations
    // =========================================================================

    /// Replaces the product catalog wholesale.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Appends a newly created product to the catalog.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replaces the catalog entry with a matching id.
    ///
    /// ## Errors
    /// Returns [`CoreError::ProductNotFound`] when no entry matches; the
    /// catalog is left untouched.
    pub fn update_product(&mut self, product: Product) -> CoreResult<()> {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(CoreError::ProductNotFound(product.id)),
        }
    }

    /// Removes the catalog entry with the given id. No-op if absent.
    pub fn remove_product(&mut self, product_id: i64) {
        self.products.retain(|p| p.id != product_id);
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds a product to the cart, rejecting duplicates.
    ///
    /// This is the guarded entry point: the cart's own `add` increments
    /// quantity on repeat, but a product already in the cart must be
    /// reported, not mutated. Quantity changes go through the cart's
    /// increase/decrease mutations instead.
    ///
    /// ## Errors
    /// Returns [`CoreError::AlreadyInCart`] when the product id already
    /// has a cart line.
    pub fn add_to_cart(&mut self, product: &Product) -> CoreResult<()> {
        if self.cart.contains(product.id) {
            return Err(CoreError::AlreadyInCart(product.id));
        }
        self.cart.add(product);
        Ok(())
    }

    // =========================================================================
    // Order Mutations
    // =========================================================================

    /// Replaces the order list wholesale.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Appends a server-created order to the local list.
    pub fn push_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    // =========================================================================
    // Auth Mutations
    // =========================================================================

    /// Sets the current user (or clears it with `None`).
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Sets the bearer token. An empty string drops back to Anonymous.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Logs out: clears user and token unconditionally.
    pub fn log_out(&mut self) {
        self.user = None;
        self.token.clear();
    }

    // =========================================================================
    // Derived Views
    // =========================================================================
    // Recomputed from current state on every access; nothing is cached.

    /// Number of lines in the cart.
    pub fn cart_count(&self) -> usize {
        self.cart.line_count()
    }

    /// Cart subtotal: Σ price × quantity across lines.
    pub fn cart_subtotal_cents(&self) -> i64 {
        self.cart.subtotal_cents()
    }

    /// Cart totals snapshot for display.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    /// True when a non-empty token is held.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// True when a user is present and flagged as admin.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Current authentication state.
    pub fn auth_status(&self) -> AuthStatus {
        if self.is_authenticated() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
