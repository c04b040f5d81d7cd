//! Low-level HTTP client — `BooksHttp`.
//!
//! Issues exactly one request per call. Authorization is passed per request as
//! the raw token string (no `Bearer` prefix); when no token is given the header
//! is omitted and the server decides. Requests are never retried.

use crate::error::HttpError;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Simple Books REST API.
#[derive(Debug, Clone)]
pub struct BooksHttp {
    base_url: String,
    client: Client,
}

impl BooksHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Typed helpers ────────────────────────────────────────────────────

    /// `GET` a path and parse the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, HttpError> {
        let resp = self.send(Method::GET, path, token, None::<&()>).await?;
        parse_json(resp).await
    }

    /// `POST` a JSON body and parse the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, HttpError> {
        let resp = self.send(Method::POST, path, token, Some(body)).await?;
        parse_json(resp).await
    }

    /// `PATCH` a JSON body. The service answers with an empty body, so only
    /// the status is checked.
    pub async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<StatusCode, HttpError> {
        let resp = self.send(Method::PATCH, path, token, Some(body)).await?;
        ensure_success(resp).await.map(|r| r.status())
    }

    /// `DELETE` a path and hand back the raw status without judging it.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<StatusCode, HttpError> {
        let resp = self.send(Method::DELETE, path, token, None::<&()>).await?;
        Ok(resp.status())
    }

    // ── Raw request ──────────────────────────────────────────────────────

    /// Send a request and return the response regardless of its status.
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Response, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);

        if let Some(token) = token {
            req = req.header(reqwest::header::AUTHORIZATION, token);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        tracing::debug!(
            method = %method,
            status = resp.status().as_u16(),
            authorized = token.is_some(),
            "{}",
            url
        );
        Ok(resp)
    }
}

async fn ensure_success(resp: Response) -> Result<Response, HttpError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body_text = resp.text().await.unwrap_or_default();
    Err(HttpError::from_status(status.as_u16(), body_text))
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, HttpError> {
    let resp = ensure_success(resp).await?;
    Ok(resp.json::<T>().await?)
}
