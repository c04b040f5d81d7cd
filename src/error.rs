//! Unified client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    #[error("Cannot pick an order from an empty id set")]
    EmptyOrderSet,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: String },
}

impl HttpError {
    /// Map a non-success status and its body text to an error.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized(body),
            404 => HttpError::NotFound(body),
            409 => HttpError::Conflict(body),
            400..=499 => HttpError::BadRequest { status, body },
            _ => HttpError::ServerError { status, body },
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The registration endpoint did not return an `accessToken`.
    #[error("Registration failed (status {status}): {reason}")]
    Registration { status: u16, reason: String },
}

/// Credential persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credential file exists but does not hold a valid record.
    #[error("Malformed credential file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The credential could not be encoded for writing.
    #[error("Could not encode credential: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}
