//! Integration tests for the remote-backed catalog and order actions.
//!
//! Each test runs the store against a wiremock server and verifies:
//! - the request shape (method, path, bearer header, method override)
//! - the single state mutation applied on success
//! - the swallow/notify behavior on failure

mod common;

use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_client::NoticeLevel;
use shopfront_core::ProductInput;

use common::{authenticated_store_for, product_json, store_for};

fn product_input(name: &str, price_cents: i64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: None,
        price_cents,
        image_url: None,
    }
}

// =============================================================================
// Catalog Fetch
// =============================================================================

#[tokio::test]
async fn fetch_products_replaces_catalog_with_bearer_attached() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, _) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("GET"))
        .and(path("/admin/products"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json(1, "Mug", 1250),
            product_json(2, "Shirt", 2500),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    store.fetch_products().await;

    let products = store.products();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Mug");
    assert_eq!(products[1].price_cents, 2500);
}

#[tokio::test]
async fn fetch_products_failure_is_swallowed() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = store_for(&server.uri(), &dir);

    Mock::given(method("GET"))
        .and(path("/admin/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // No panic, no notice, no state change: the absent update is the
    // only signal the caller gets.
    store.fetch_products().await;

    assert!(store.products().is_empty());
    assert!(notifier.take().is_empty());
}

// =============================================================================
// Product CRUD
// =============================================================================

#[tokio::test]
async fn add_product_appends_catalog_entry_and_notifies_success() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("POST"))
        .and(path("/admin/products"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_json(7, "Poster", 900)))
        .expect(1)
        .mount(&server)
        .await;

    store.add_product(product_input("Poster", 900)).await;

    let products = store.products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 7);

    let notices = notifier.take();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn add_product_failure_notifies_error_without_mutation() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("POST"))
        .and(path("/admin/products"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "validation failed"})),
        )
        .mount(&server)
        .await;

    store.add_product(product_input("Poster", 900)).await;

    assert!(store.products().is_empty());
    let notices = notifier.take();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

#[tokio::test]
async fn add_product_invalid_payload_never_reaches_network() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    // Any request at all would fail the mock expectation
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    store.add_product(product_input("", 900)).await;
    store.add_product(product_input("Poster", -1)).await;

    assert!(store.products().is_empty());
    let notices = notifier.take();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn update_product_uses_put_override_and_replaces_entry() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("GET"))
        .and(path("/admin/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json(1, "Mug", 1250),
            product_json(2, "Shirt", 2500),
        ])))
        .mount(&server)
        .await;
    store.fetch_products().await;

    let mut renamed = product_json(2, "Shirt v2", 2750);
    renamed["description"] = json!("Restocked");
    Mock::given(method("POST"))
        .and(path("/admin/products/2"))
        .and(query_param("_method", "PUT"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(renamed))
        .expect(1)
        .mount(&server)
        .await;

    store.update_product(2, product_input("Shirt v2", 2750)).await;

    let products = store.products();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Mug"); // untouched
    assert_eq!(products[1].name, "Shirt v2");
    assert_eq!(products[1].price_cents, 2750);

    let notices = notifier.take();
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn update_product_missing_locally_still_notifies_success() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    // Catalog never fetched: the server-side update succeeds but there is
    // no local entry to replace.
    Mock::given(method("POST"))
        .and(path("/admin/products/9"))
        .and(query_param("_method", "PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(9, "Ghost", 100)))
        .expect(1)
        .mount(&server)
        .await;

    store.update_product(9, product_input("Ghost", 100)).await;

    assert!(store.products().is_empty());
    assert_eq!(notifier.take()[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn delete_product_removes_catalog_entry() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("GET"))
        .and(path("/admin/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json(1, "Mug", 1250)])),
        )
        .mount(&server)
        .await;
    store.fetch_products().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/products/1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    store.delete_product(1).await;

    assert!(store.products().is_empty());
    assert_eq!(notifier.take()[0].level, NoticeLevel::Success);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn fetch_orders_replaces_list_wholesale() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, _) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "total_cents": 1750, "status": "pending"},
            {"id": 11, "total_cents": 900, "status": "shipped"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    store.fetch_orders().await;

    let orders = store.orders();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, 10);
    // Opaque server fields are carried through untouched
    assert_eq!(orders[1].details["status"], "shipped");
}

#[tokio::test]
async fn add_order_appends_server_created_record() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, _) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 42, "total_cents": 1250, "status": "pending"}
        )))
        .expect(1)
        .mount(&server)
        .await;

    store
        .add_order(json!({"lines": [{"product_id": 1, "quantity": 1}]}))
        .await;

    let orders = store.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, 42);
}

#[tokio::test]
async fn add_order_failure_is_swallowed() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (store, notifier) = authenticated_store_for(&server.uri(), &dir, "test-token");

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    store.add_order(json!({})).await;

    assert!(store.orders().is_empty());
    assert!(notifier.take().is_empty());
}
