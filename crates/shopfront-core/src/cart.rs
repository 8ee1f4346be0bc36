//! # Cart
//!
//! The shopping cart and its mutation logic.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Mutations                                 │
//! │                                                                     │
//! │  UI Action                Mutation              Cart Change         │
//! │  ─────────                ────────              ───────────         │
//! │                                                                     │
//! │  Click "Add" ───────────► add(product) ───────► push line (qty 1)   │
//! │                                                 or qty += 1         │
//! │                                                                     │
//! │  Click "+" ─────────────► increase(id) ───────► qty += 1            │
//! │                                                                     │
//! │  Click "−" ─────────────► decrease(id) ───────► qty −= 1, or        │
//! │                                                 remove at qty 1     │
//! │                                                                     │
//! │  Click "Remove" ────────► remove(id) ─────────► filter line out     │
//! │                                                                     │
//! │  Checkout done ─────────► clear() ────────────► lines.clear()       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations are infallible: operations on an absent product id are no-ops.
//! The "already in cart" guard lives in
//! [`crate::state::StoreState::add_to_cart`], not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart: one product reference plus a quantity.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog entry
/// - name and price are frozen at the moment of adding, so the cart
///   displays consistent data even if the catalog refetches underneath it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product ID this line refers to.
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Invariant: always ≥ 1.
    pub quantity: i64,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increases quantity instead)
/// - Every line has quantity ≥ 1 (decreasing past 1 removes the line)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1, in place
    /// - Product not in cart: a new line with quantity 1 is appended
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine::from_product(product));
    }

    /// Increases the quantity of a line by 1. No-op if the id is absent.
    pub fn increase(&mut self, product_id: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += 1;
        }
    }

    /// Decreases the quantity of a line by 1.
    ///
    /// ## Behavior
    /// - Quantity above 1: decremented in place
    /// - Quantity exactly 1: the line is removed (quantity never reaches 0)
    /// - Id absent: no-op
    pub fn decrease(&mut self, product_id: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            } else {
                self.lines.retain(|l| l.product_id != product_id);
            }
        }
    }

    /// Removes a line by product id. No error if absent.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks whether a product id is already in the cart.
    pub fn contains(&self, product_id: i64) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }

    /// Returns the number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart subtotal: Σ unit price × quantity.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: None,
            price_cents,
            image_url: None,
        }
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1000)); // $10.00

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 1);
        assert_eq!(cart.subtotal_cents(), 1000);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.subtotal_cents(), 1998);
    }

    #[test]
    fn test_increase_then_decrease_restores_quantity() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500));
        cart.increase(1);
        assert_eq!(cart.lines[0].quantity, 2);

        cart.decrease(1);
        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn test_decrease_at_quantity_one_removes_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500));

        cart.decrease(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_and_decrease_absent_id_are_noops() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500));

        cart.increase(99);
        cart.decrease(99);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500));

        cart.remove(99);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_frozen_line_keeps_original_price() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500));

        // Catalog price changes have no effect on the existing line
        let repriced = test_product(1, 900);
        cart.add(&repriced);

        assert_eq!(cart.lines[0].unit_price_cents, 500);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1000));
        cart.add(&test_product(2, 250));
        cart.increase(2);
        cart.increase(2);

        // 1 × 1000 + 3 × 250
        assert_eq!(cart.subtotal_cents(), 1750);
        assert_eq!(cart.total_quantity(), 4);
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.subtotal_cents(), 0);
        assert_eq!(cart.line_count(), 0);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500));
        cart.add(&test_product(2, 700));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_totals_snapshot() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1000));
        cart.increase(1);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_cents, 2000);
    }
}
