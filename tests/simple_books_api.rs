//! End-to-end suite: obtain a token, submit an order, list orders, update one.
//!
//! `test_simple_books_flow_mocked` runs against a local mock server. The live
//! variant hits the real service and is `#[ignore]` because it needs network
//! access plus `USER_NAME` / `USER_EMAIL` (a `.env` file works).
//!
//! Run the live test with:
//! ```bash
//! cargo test --test simple_books_api -- --ignored
//! ```

mod common;

use mockito::Matcher;
use serde_json::json;
use simple_books::prelude::*;

use common::{init_tracing, order_json, TOKEN};

#[tokio::test]
async fn test_simple_books_flow_mocked() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;

    let register = server
        .mock("POST", "/api-clients/")
        .with_status(201)
        .with_body(json!({"accessToken": TOKEN}).to_string())
        .expect(1)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/orders/")
        .match_header("authorization", TOKEN)
        .with_status(201)
        .with_body(r#"{"created":true,"orderId":"o1"}"#)
        .create_async()
        .await;
    let _fetch_o1 = server
        .mock("GET", "/orders/o1")
        .match_header("authorization", TOKEN)
        .with_status(200)
        .with_body(order_json("o1", "EG"))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/orders")
        .match_header("authorization", TOKEN)
        .with_status(200)
        .with_body(format!("[{}]", order_json("o1", "EG")))
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/orders/o1")
        .match_header("authorization", TOKEN)
        .match_body(Matcher::Json(json!({"customerName": "Pepe el cambiaso"})))
        .with_status(204)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig {
        base_url: server.url(),
        identity: ClientIdentity::new("eg", "eg@example.com"),
        token_path: dir.path().join("Utils").join("token.json"),
        ..ClientConfig::default()
    };
    let client = BooksClient::from_config(config).unwrap();

    client.auth().token().await.unwrap();
    let submitted = client.orders().submit().await.unwrap();
    assert_eq!(submitted.id, "o1");

    let ids = client.orders().list_ids().await.unwrap();
    assert_eq!(ids, vec![submitted.id.clone()]);

    // Second run within the validity window reuses the persisted token.
    let rerun = BooksClient::builder()
        .base_url(&server.url())
        .token_path(dir.path().join("Utils").join("token.json"))
        .build()
        .unwrap();
    assert_eq!(rerun.auth().token().await.unwrap(), TOKEN);

    client.orders().update(&ids).await.unwrap();

    register.assert_async().await;
    submit.assert_async().await;
    list.assert_async().await;
    patch.assert_async().await;
}

#[tokio::test]
#[ignore]
async fn test_simple_books_flow_live() {
    init_tracing();
    let client = BooksClient::from_config(ClientConfig::from_env().expect("config"))
        .expect("client should build");

    let token = client.auth().token().await.expect("token");
    assert!(!token.is_empty());

    let books = client.books().list().await.expect("books");
    assert!(!books.is_empty());

    let submitted = client.orders().submit().await.expect("submit");
    let ids = client.orders().list_ids().await.expect("list ids");
    assert!(ids.contains(&submitted.id), "submitted order should be listed");

    let updated = client.orders().update(&ids).await.expect("update");
    assert_eq!(updated.customer_name, client.fixture().updated_customer_name);

    let outcome = client
        .orders()
        .delete_by_id(&submitted.id)
        .await
        .expect("delete");
    assert!(outcome.deleted, "delete returned status {}", outcome.status);
}
