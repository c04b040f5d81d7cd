//! # Simple Books client
//!
//! A token-cached Rust client for the Simple Books ordering API, plus the
//! end-to-end test suite that exercises it.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Errors, shared newtypes, domain models (books, orders)
//! 2. **Auth** — Credential persistence (`CredentialStore`) + registration
//! 3. **HTTP API** — `BooksHttp`, a thin request wrapper with raw-token auth
//! 4. **High-Level Client** — `BooksClient` with nested sub-clients
//! 5. **Config** — Environment-driven client configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use simple_books::prelude::*;
//!
//! let client = BooksClient::from_config(ClientConfig::from_env()?)?;
//!
//! client.auth().token().await?;
//! let order = client.orders().submit().await?;
//! let ids = client.orders().list_ids().await?;
//! let updated = client.orders().update(&ids).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and serde helpers.
pub mod shared;

/// Domain modules: books and orders.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, credential stores, registration.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP request wrapper.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BooksClient` — the primary entry point.
pub mod client;

// ── Layer 5: Config ──────────────────────────────────────────────────────────

/// Environment-driven configuration.
pub mod config;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::OrderId;

    pub use crate::domain::book::{Book, BookType};
    pub use crate::domain::order::{DeleteOutcome, Order, OrderFixture};

    pub use crate::error::{AuthError, HttpError, SdkError, StoreError};

    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TOKEN_PATH};

    pub use crate::auth::store::{CredentialStore, FileStore, MemoryStore};
    pub use crate::auth::{ClientIdentity, Credential, TOKEN_VALIDITY};

    pub use crate::client::{
        AuthClient, BooksClient, BooksClientBuilder, BooksSubClient, OrdersClient,
    };
    pub use crate::config::ClientConfig;
}
