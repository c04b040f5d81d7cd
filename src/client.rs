//! High-level client — `BooksClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`; auth lives
//! in `auth/client.rs`. This module keeps the builder, shared state, and
//! accessor methods.

use crate::auth::client::Auth;
use crate::auth::store::{CredentialStore, FileStore};
use crate::auth::ClientIdentity;
use crate::config::ClientConfig;
use crate::domain::book::client::Books;
use crate::domain::order::client::Orders;
use crate::domain::order::OrderFixture;
use crate::error::SdkError;
use crate::http::BooksHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_PATH};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::book::client::Books as BooksSubClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors: `client.auth()`, `client.books()`,
/// `client.orders()`. Clones share the HTTP connection pool and the
/// credential store.
#[derive(Debug, Clone)]
pub struct BooksClient {
    pub(crate) http: BooksHttp,
    /// Where the access token lives. Read on every authorized request.
    pub(crate) store: Arc<dyn CredentialStore>,
    pub(crate) identity: ClientIdentity,
    pub(crate) fixture: OrderFixture,
}

impl BooksClient {
    pub fn builder() -> BooksClientBuilder {
        BooksClientBuilder::default()
    }

    /// Build a client from environment-derived configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, SdkError> {
        BooksClient::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout)
            .identity(config.identity)
            .token_path(config.token_path)
            .fixture(config.fixture)
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn books(&self) -> Books<'_> {
        Books { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn fixture(&self) -> &OrderFixture {
        &self.fixture
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BooksClientBuilder {
    base_url: String,
    timeout: Duration,
    identity: ClientIdentity,
    store: Option<Arc<dyn CredentialStore>>,
    token_path: PathBuf,
    fixture: OrderFixture,
}

impl Default for BooksClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            identity: ClientIdentity::default(),
            store: None,
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            fixture: OrderFixture::default(),
        }
    }
}

impl BooksClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Name and email sent when registering for a token.
    pub fn identity(mut self, identity: ClientIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn client(mut self, name: &str, email: &str) -> Self {
        self.identity = ClientIdentity::new(name, email);
        self
    }

    /// Persist the credential in a JSON file at `path`. Ignored when a
    /// custom store is set.
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }

    /// Use a custom credential store instead of the default file.
    pub fn store(mut self, store: impl CredentialStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn fixture(mut self, fixture: OrderFixture) -> Self {
        self.fixture = fixture;
        self
    }

    pub fn build(self) -> Result<BooksClient, SdkError> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(FileStore::new(self.token_path)));

        Ok(BooksClient {
            http: BooksHttp::new(&self.base_url, self.timeout)?,
            store,
            identity: self.identity,
            fixture: self.fixture,
        })
    }
}
