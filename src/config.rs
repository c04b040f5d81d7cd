//! Environment-driven configuration.
//!
//! `ClientConfig::from_env()` loads a `.env` file (if present) and reads:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `USER_NAME` | client name sent at registration | empty |
//! | `USER_EMAIL` | client email sent at registration | empty |
//! | `SIMPLE_BOOKS_API_URL` | API base URL | [`DEFAULT_API_URL`] |
//! | `SIMPLE_BOOKS_TOKEN_PATH` | credential file | [`DEFAULT_TOKEN_PATH`] |
//! | `SIMPLE_BOOKS_TIMEOUT_SECS` | request timeout | 30 |
//! | `SIMPLE_BOOKS_BOOK_ID` | book ordered by `submit()` | 1 |
//! | `SIMPLE_BOOKS_CUSTOMER_NAME` | customer on submitted orders | `EG` |
//! | `SIMPLE_BOOKS_UPDATED_CUSTOMER_NAME` | customer written by `update()` | `Pepe el cambiaso` |
//!
//! Missing identity variables are not an error; the service rejects the
//! registration instead.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::ClientIdentity;
use crate::domain::order::OrderFixture;
use crate::error::SdkError;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_PATH};

pub const ENV_USER_NAME: &str = "USER_NAME";
pub const ENV_USER_EMAIL: &str = "USER_EMAIL";
pub const ENV_API_URL: &str = "SIMPLE_BOOKS_API_URL";
pub const ENV_TOKEN_PATH: &str = "SIMPLE_BOOKS_TOKEN_PATH";
pub const ENV_TIMEOUT_SECS: &str = "SIMPLE_BOOKS_TIMEOUT_SECS";
pub const ENV_BOOK_ID: &str = "SIMPLE_BOOKS_BOOK_ID";
pub const ENV_CUSTOMER_NAME: &str = "SIMPLE_BOOKS_CUSTOMER_NAME";
pub const ENV_UPDATED_CUSTOMER_NAME: &str = "SIMPLE_BOOKS_UPDATED_CUSTOMER_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub identity: ClientIdentity,
    pub token_path: PathBuf,
    pub timeout: Duration,
    pub fixture: OrderFixture,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            identity: ClientIdentity::default(),
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fixture: OrderFixture::default(),
        }
    }
}

impl ClientConfig {
    /// Load `.env` (if any) and read configuration from the process environment.
    pub fn from_env() -> Result<Self, SdkError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let fixture_defaults = defaults.fixture;

        Ok(Self {
            base_url: lookup(ENV_API_URL).unwrap_or(defaults.base_url),
            identity: ClientIdentity::new(
                lookup(ENV_USER_NAME).unwrap_or_default(),
                lookup(ENV_USER_EMAIL).unwrap_or_default(),
            ),
            token_path: lookup(ENV_TOKEN_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.token_path),
            timeout: parse_var::<u64>(&lookup, ENV_TIMEOUT_SECS)?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            fixture: OrderFixture {
                book_id: parse_var(&lookup, ENV_BOOK_ID)?.unwrap_or(fixture_defaults.book_id),
                customer_name: lookup(ENV_CUSTOMER_NAME)
                    .unwrap_or(fixture_defaults.customer_name),
                updated_customer_name: lookup(ENV_UPDATED_CUSTOMER_NAME)
                    .unwrap_or(fixture_defaults.updated_customer_name),
            },
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, SdkError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| SdkError::Config(format!("{}={:?}: {}", key, raw, e)))
        })
        .transpose()
}
