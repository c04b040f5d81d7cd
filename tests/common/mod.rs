//! Shared helpers for the integration tests.

#![allow(dead_code)]

use mockito::ServerGuard;
use simple_books::prelude::*;

pub const TOKEN: &str = "tok123";

/// Route test logs through the test writer. Honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client pointed at the mock server, backed by `store`.
pub fn client_with(server: &ServerGuard, store: impl CredentialStore + 'static) -> BooksClient {
    init_tracing();
    BooksClient::builder()
        .base_url(&server.url())
        .client("eg", "eg@example.com")
        .store(store)
        .build()
        .expect("client should build")
}

/// A client whose store already holds a fresh `TOKEN`.
pub fn authorized_client(server: &ServerGuard) -> (BooksClient, MemoryStore) {
    let store = MemoryStore::with_credential(Credential::issue(TOKEN));
    (client_with(server, store.clone()), store)
}

pub fn order_json(id: &str, customer: &str) -> String {
    serde_json::json!({
        "id": id,
        "bookId": 1,
        "customerName": customer,
        "createdBy": "c0ffee",
        "quantity": 1,
        "timestamp": 1_718_000_000_000i64
    })
    .to_string()
}
