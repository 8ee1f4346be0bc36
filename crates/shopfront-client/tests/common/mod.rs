//! Shared harness for store action tests.
#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use shopfront_client::{ClientConfig, MemoryNotifier, Store};

/// Routes action logs to the test writer. `RUST_LOG=debug` shows the
/// request/mutation trace for a failing test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a store pointed at the mock server, with a collecting notifier
/// and a throwaway token file inside `dir`.
pub fn store_for(server_uri: &str, dir: &TempDir) -> (Store, Arc<MemoryNotifier>) {
    init_tracing();
    let notifier = Arc::new(MemoryNotifier::new());
    let config = ClientConfig::default()
        .with_base_url(server_uri)
        .with_token_path(dir.path().join("token"));

    let store = Store::new(config)
        .expect("store build")
        .with_notifier(Box::new(Arc::clone(&notifier)));

    (store, notifier)
}

/// Writes a token file and restores the session, so subsequent requests
/// carry `Bearer <token>`.
pub fn authenticated_store_for(
    server_uri: &str,
    dir: &TempDir,
    token: &str,
) -> (Store, Arc<MemoryNotifier>) {
    std::fs::write(dir.path().join("token"), token).expect("seed token file");
    let (store, notifier) = store_for(server_uri, dir);
    assert!(store.restore_session().expect("restore session"));
    (store, notifier)
}

/// A catalog product as the backend serializes it.
pub fn product_json(id: i64, name: &str, price_cents: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "price_cents": price_cents,
        "image_url": null,
    })
}
