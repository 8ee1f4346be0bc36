//! # Store
//!
//! The storefront state container facade: locked [`StoreState`] plus the
//! remote-backed actions that drive it.
//!
//! ## Error Propagation per Action Category
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Action Error Handling                            │
//! │                                                                     │
//! │  Read actions              fetch_products, fetch_orders,            │
//! │  (log + swallow)           fetch_user, add_order                    │
//! │                            └─► caller sees no error; the missing    │
//! │                                state update is the only signal      │
//! │                                                                     │
//! │  Product CRUD              add_product, update_product,             │
//! │  (log + notify + stop)     delete_product                           │
//! │                            └─► error notice emitted, not raised     │
//! │                                                                     │
//! │  Auth actions              register, login                          │
//! │  (log + RETHROW)           └─► caller gets the error and reacts     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! State lives behind one `std::sync::Mutex`, held only for a single
//! synchronous mutation and never across an await point. Concurrent
//! actions interleave at the HTTP boundary; each mutation is atomic
//! relative to the others.
//!
//! ## Session Restore
//! Nothing is read from disk implicitly. The composition root calls
//! [`Store::restore_session`] once at startup to pick up a persisted
//! token.

use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, error, info};

use shopfront_core::validation::{
    validate_credentials, validate_product_input, validate_registration,
};
use shopfront_core::{
    AuthStatus, Cart, CartTotals, Credentials, Order, Product, ProductInput, Registration,
    StoreState, User,
};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::notify::{LogNotifier, Notice, Notifier};
use crate::token::TokenStore;

/// The storefront store: state container plus remote-backed actions.
pub struct Store {
    state: Mutex<StoreState>,
    api: ApiClient,
    tokens: TokenStore,
    notifier: Box<dyn Notifier>,
}

impl Store {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a store from the given configuration, with the default
    /// tracing-backed notifier.
    ///
    /// ## Errors
    /// Returns an error if the HTTP client cannot be built or the token
    /// storage location cannot be determined.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::new(&config)?;
        let tokens = match &config.token_path {
            Some(path) => TokenStore::at_path(path),
            None => TokenStore::in_data_dir()?,
        };

        Ok(Store {
            state: Mutex::new(StoreState::new()),
            api,
            tokens,
            notifier: Box::new(LogNotifier),
        })
    }

    /// Replaces the notifier. UI hosts plug their toast bridge in here.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Restores a persisted session, if any.
    ///
    /// Explicit initialization step for the composition root: reads the
    /// persisted token and sets it in state. Does not touch the network;
    /// chain a [`Store::fetch_user`] afterwards to resolve the profile.
    ///
    /// Returns whether a token was restored.
    pub fn restore_session(&self) -> ClientResult<bool> {
        match self.tokens.load()? {
            Some(token) => {
                info!("Restored persisted session token");
                self.with_state_mut(|s| s.set_token(token));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // Read Actions (log + swallow)
    // =========================================================================

    /// Fetches the product catalog and replaces it wholesale.
    pub async fn fetch_products(&self) {
        debug!("fetch_products action");
        match self.api.fetch_products(self.bearer().as_deref()).await {
            Ok(products) => self.with_state_mut(|s| s.set_products(products)),
            Err(e) => error!(error = %e, "Failed to fetch products"),
        }
    }

    /// Fetches the order history and replaces it wholesale.
    pub async fn fetch_orders(&self) {
        debug!("fetch_orders action");
        match self.api.fetch_orders(self.bearer().as_deref()).await {
            Ok(orders) => self.with_state_mut(|s| s.set_orders(orders)),
            Err(e) => error!(error = %e, "Failed to fetch orders"),
        }
    }

    /// Fetches the authenticated user's profile and sets it in state.
    pub async fn fetch_user(&self) {
        debug!("fetch_user action");
        match self.api.fetch_user(self.bearer().as_deref()).await {
            Ok(user) => self.with_state_mut(|s| s.set_user(Some(user))),
            Err(e) => error!(error = %e, "Failed to fetch user profile"),
        }
    }

    /// Places an order and appends the server-created record locally.
    pub async fn add_order(&self, payload: Value) {
        debug!("add_order action");
        match self.api.create_order(self.bearer().as_deref(), &payload).await {
            Ok(order) => self.with_state_mut(|s| s.push_order(order)),
            Err(e) => error!(error = %e, "Failed to place order"),
        }
    }

    // =========================================================================
    // Product CRUD Actions (log + notify + stop)
    // =========================================================================

    /// Creates a product and appends it to the catalog.
    pub async fn add_product(&self, input: ProductInput) {
        debug!(name = %input.name, "add_product action");

        if let Err(e) = validate_product_input(&input) {
            error!(error = %e, "Invalid product payload");
            self.notifier.notify(Notice::error("Failed to add product."));
            return;
        }

        match self.api.create_product(self.bearer().as_deref(), &input).await {
            Ok(product) => {
                self.with_state_mut(|s| s.add_product(product));
                self.notifier
                    .notify(Notice::success("Product added successfully!"));
            }
            Err(e) => {
                error!(error = %e, "Failed to add product");
                self.notifier.notify(Notice::error("Failed to add product."));
            }
        }
    }

    /// Updates a product and replaces its catalog entry.
    pub async fn update_product(&self, product_id: i64, input: ProductInput) {
        debug!(product_id, "update_product action");

        if let Err(e) = validate_product_input(&input) {
            error!(error = %e, "Invalid product payload");
            self.notifier
                .notify(Notice::error("Failed to update product."));
            return;
        }

        match self
            .api
            .update_product(self.bearer().as_deref(), product_id, &input)
            .await
        {
            Ok(product) => {
                // Server accepted the update; a missing local entry only
                // means the catalog was never fetched.
                if let Err(e) = self.with_state_mut(|s| s.update_product(product)) {
                    error!(error = %e, "Updated product missing from local catalog");
                }
                self.notifier
                    .notify(Notice::success("Product updated successfully!"));
            }
            Err(e) => {
                error!(error = %e, "Failed to update product");
                self.notifier
                    .notify(Notice::error("Failed to update product."));
            }
        }
    }

    /// Deletes a product and removes its catalog entry.
    pub async fn delete_product(&self, product_id: i64) {
        debug!(product_id, "delete_product action");

        match self
            .api
            .delete_product(self.bearer().as_deref(), product_id)
            .await
        {
            Ok(()) => {
                self.with_state_mut(|s| s.remove_product(product_id));
                self.notifier
                    .notify(Notice::success("Product deleted successfully!"));
            }
            Err(e) => {
                error!(error = %e, "Failed to delete product");
                self.notifier
                    .notify(Notice::error("Failed to delete product."));
            }
        }
    }

    // =========================================================================
    // Auth Actions (log + rethrow)
    // =========================================================================

    /// Registers a new account, stores the token, and chains a profile
    /// fetch (whose own failure is swallowed).
    ///
    /// ## Errors
    /// Re-raises validation, HTTP, and persistence failures so the UI can
    /// present them. On failure no token is stored.
    pub async fn register(&self, registration: Registration) -> ClientResult<()> {
        debug!(email = %registration.email, "register action");

        validate_registration(&registration).inspect_err(|e| {
            error!(error = %e, "Invalid registration payload");
        })?;

        let token = self.api.register(&registration).await.inspect_err(|e| {
            error!(error = %e, "Registration failed");
        })?;

        self.apply_token(&token)?;
        info!("Registered and authenticated");

        self.fetch_user().await;
        Ok(())
    }

    /// Logs in, stores the token, and chains a profile fetch (whose own
    /// failure is swallowed).
    ///
    /// ## Errors
    /// Re-raises HTTP and persistence failures so the UI can present
    /// them. On failure no token is stored.
    pub async fn login(&self, credentials: Credentials) -> ClientResult<()> {
        debug!(email = %credentials.email, "login action");

        validate_credentials(&credentials).inspect_err(|e| {
            error!(error = %e, "Invalid login payload");
        })?;

        let token = self.api.login(&credentials).await.inspect_err(|e| {
            error!(error = %e, "Login failed");
        })?;

        self.apply_token(&token)?;
        info!("Logged in");

        self.fetch_user().await;
        Ok(())
    }

    /// Logs out: clears user and token, removes the persisted token.
    /// Transitions Authenticated → Anonymous unconditionally.
    pub fn logout(&self) {
        info!("Logging out");
        self.with_state_mut(|s| s.log_out());

        if let Err(e) = self.tokens.clear() {
            error!(error = %e, "Failed to remove persisted token");
        }
    }

    // =========================================================================
    // Cart Actions (synchronous)
    // =========================================================================

    /// Adds a product to the cart, guarded against duplicates.
    ///
    /// ## Behavior
    /// - Product id already in cart: warning notice, NO state change
    /// - Otherwise: new line with quantity 1, success notice
    pub fn add_to_cart(&self, product: &Product) {
        debug!(product_id = product.id, "add_to_cart action");

        match self.with_state_mut(|s| s.add_to_cart(product)) {
            Ok(()) => self.notifier.notify(Notice::success("Added to cart!")),
            Err(e) => {
                debug!(error = %e, "Rejected cart add");
                self.notifier
                    .notify(Notice::warning("Product already in cart!"));
            }
        }
    }

    /// Removes a cart line by product id. No error if absent.
    pub fn remove_from_cart(&self, product_id: i64) {
        debug!(product_id, "remove_from_cart action");
        self.with_state_mut(|s| s.cart.remove(product_id));
    }

    /// Increases a line's quantity by 1.
    pub fn increase_quantity(&self, product_id: i64) {
        debug!(product_id, "increase_quantity action");
        self.with_state_mut(|s| s.cart.increase(product_id));
    }

    /// Decreases a line's quantity by 1, removing the line at quantity 1.
    pub fn decrease_quantity(&self, product_id: i64) {
        debug!(product_id, "decrease_quantity action");
        self.with_state_mut(|s| s.cart.decrease(product_id));
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        debug!("clear_cart action");
        self.with_state_mut(|s| s.cart.clear());
    }

    // =========================================================================
    // Derived Views / Read Accessors
    // =========================================================================

    /// Snapshot of the product catalog.
    pub fn products(&self) -> Vec<Product> {
        self.with_state(|s| s.products.clone())
    }

    /// Snapshot of the cart.
    pub fn cart(&self) -> Cart {
        self.with_state(|s| s.cart.clone())
    }

    /// Snapshot of the order history.
    pub fn orders(&self) -> Vec<Order> {
        self.with_state(|s| s.orders.clone())
    }

    /// The current user, if the profile fetch has resolved.
    pub fn user(&self) -> Option<User> {
        self.with_state(|s| s.user.clone())
    }

    /// The current bearer token. Empty string means unauthenticated.
    pub fn token(&self) -> String {
        self.with_state(|s| s.token.clone())
    }

    /// Number of cart lines.
    pub fn cart_count(&self) -> usize {
        self.with_state(|s| s.cart_count())
    }

    /// Cart subtotal: Σ price × quantity.
    pub fn cart_subtotal_cents(&self) -> i64 {
        self.with_state(|s| s.cart_subtotal_cents())
    }

    /// Cart totals snapshot for display.
    pub fn cart_totals(&self) -> CartTotals {
        self.with_state(|s| s.cart_totals())
    }

    /// True when a non-empty token is held.
    pub fn is_authenticated(&self) -> bool {
        self.with_state(|s| s.is_authenticated())
    }

    /// True when the user is present and flagged as admin.
    pub fn is_admin(&self) -> bool {
        self.with_state(|s| s.is_admin())
    }

    /// Current authentication state.
    pub fn auth_status(&self) -> AuthStatus {
        self.with_state(|s| s.auth_status())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Executes a closure with read access to the state.
    fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreState) -> R,
    {
        let state = self.state.lock().expect("store state mutex poisoned");
        f(&state)
    }

    /// Executes a closure with write access to the state.
    ///
    /// The lock is held only for the synchronous closure, never across an
    /// await point.
    fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreState) -> R,
    {
        let mut state = self.state.lock().expect("store state mutex poisoned");
        f(&mut state)
    }

    /// The bearer token to thread into the next request, if any.
    fn bearer(&self) -> Option<String> {
        self.with_state(|s| {
            if s.token.is_empty() {
                None
            } else {
                Some(s.token.clone())
            }
        })
    }

    /// Sets the token in state and mirrors it into persistent storage.
    fn apply_token(&self, token: &str) -> ClientResult<()> {
        self.with_state_mut(|s| s.set_token(token));
        self.tokens.save(token)
    }
}

// =============================================================================
// Unit Tests (synchronous action logic only; HTTP actions are covered by
// the wiremock integration tests in tests/)
// =============================================================================
