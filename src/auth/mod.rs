//! Authentication — credentials, credential persistence, registration.
//!
//! ## Token lifecycle
//!
//! The service hands out an access token when an API client registers
//! (`POST /api-clients/`). The token is persisted through a
//! [`CredentialStore`](store::CredentialStore) together with its issuance time
//! and reused for [`TOKEN_VALIDITY`]. Once that window has elapsed (or when no
//! credential exists yet) `client.auth().token()` registers again and
//! overwrites the stored record. Credentials are never deleted by the client;
//! expiry is purely time-based.

pub mod client;
pub mod store;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a freshly issued token is reused before registering again.
pub const TOKEN_VALIDITY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

// ============================================================================
// Credential
// ============================================================================

/// A persisted access token and the moment it was issued.
///
/// Serialized as `{"token": "...", "timestamp": <epoch-ms>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    #[serde(rename = "timestamp", with = "crate::shared::serde_util::timestamp_ms")]
    pub issued_at: DateTime<Utc>,
}

impl Credential {
    /// A credential issued now. Truncated to whole milliseconds so it
    /// survives the persisted format unchanged.
    pub fn issue(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            issued_at: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn new(token: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            issued_at,
        }
    }

    /// Age in milliseconds at `now`. Negative if issued in the future.
    pub fn age_millis_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.issued_at).num_milliseconds()
    }

    /// Valid iff `now - issued_at < TOKEN_VALIDITY`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.age_millis_at(now) < TOKEN_VALIDITY.as_millis() as i64
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Identity an API client registers with. Also the registration request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "clientEmail")]
    pub client_email: String,
}

impl ClientIdentity {
    pub fn new(client_name: impl Into<String>, client_email: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            client_email: client_email.into(),
        }
    }
}

/// Registration response. Success carries `accessToken`; failures such as
/// 409 (email already registered) carry `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
