//! # shopfront-client: REST Actions and Persistence
//!
//! The I/O shell around [`shopfront_core`]. This crate owns every HTTP
//! call, the persisted token file, and the notification seam; all state
//! mutations are delegated to the pure core crate.
//!
//! ## Module Organization
//! ```text
//! shopfront_client/
//! ├── lib.rs        ◄─── You are here (exports)
//! ├── store.rs      ◄─── Store facade: actions + locked state
//! ├── api.rs        ◄─── ApiClient: one method per REST endpoint
//! ├── token.rs      ◄─── TokenStore: persisted bearer token
//! ├── notify.rs     ◄─── Notifier seam (toast equivalents)
//! ├── config.rs     ◄─── ClientConfig: base URLs + token path
//! └── error.rs      ◄─── ClientError / ClientResult
//! ```
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  caller ──► Store action ──► ApiClient (bearer threaded) ──► HTTP   │
//! │                   │                                                 │
//! │                   ▼ on success                                      │
//! │             lock state, apply ONE core mutation, unlock             │
//! │                   │                                                 │
//! │                   ▼                                                 │
//! │             derived views recompute on next access                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod store;
pub mod token;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use notify::{LogNotifier, MemoryNotifier, Notice, NoticeLevel, Notifier};
pub use store::Store;
pub use token::TokenStore;
