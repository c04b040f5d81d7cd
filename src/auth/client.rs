//! Auth sub-client — token reuse and registration.

use chrono::Utc;
use reqwest::Method;
use tracing::info;

use crate::auth::{Credential, RegistrationResponse};
use crate::client::BooksClient;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a BooksClient,
}

impl<'a> Auth<'a> {
    /// Return a usable access token.
    ///
    /// Reuses the stored credential while it is younger than
    /// [`TOKEN_VALIDITY`](crate::auth::TOKEN_VALIDITY); otherwise registers,
    /// persists the new credential, and returns its token.
    pub async fn token(&self) -> Result<String, SdkError> {
        let now = Utc::now();
        match self.client.store.load().await? {
            Some(credential) if credential.is_valid_at(now) => {
                info!(
                    age_ms = credential.age_millis_at(now),
                    "Reusing cached access token"
                );
                return Ok(credential.token);
            }
            Some(credential) => {
                info!(
                    age_ms = credential.age_millis_at(now),
                    "Cached access token expired, registering again"
                );
            }
            None => info!("No cached access token, registering"),
        }

        self.register().await
    }

    /// Register the configured API client, persist the issued token, and
    /// return it.
    ///
    /// Any response without a non-empty `accessToken` is an
    /// [`AuthError::Registration`], including 409 when the email is already
    /// registered.
    pub async fn register(&self) -> Result<String, SdkError> {
        let resp = self
            .client
            .http
            .send(
                Method::POST,
                "/api-clients/",
                None,
                Some(&self.client.identity),
            )
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(HttpError::from)?;

        let parsed: RegistrationResponse = serde_json::from_str(&body).unwrap_or_default();
        let token = match parsed.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                let reason = parsed
                    .error
                    .unwrap_or_else(|| "response did not include an accessToken".to_string());
                return Err(AuthError::Registration { status, reason }.into());
            }
        };

        self.client.store.save(&Credential::issue(token.clone())).await?;
        info!(
            client_name = %self.client.identity.client_name,
            "Registered API client"
        );
        Ok(token)
    }

    /// The stored credential, if any. Does not check expiry.
    pub async fn credential(&self) -> Result<Option<Credential>, SdkError> {
        Ok(self.client.store.load().await?)
    }

    /// Whether the stored credential exists and is still inside its validity window.
    pub async fn has_valid_token(&self) -> Result<bool, SdkError> {
        Ok(self
            .credential()
            .await?
            .map(|c| c.is_valid())
            .unwrap_or(false))
    }
}
