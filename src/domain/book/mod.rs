//! Book domain — the catalogue orders are placed against.

pub mod client;

use serde::{Deserialize, Serialize};

// ─── BookType ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookType {
    Fiction,
    NonFiction,
    #[serde(other)]
    Other,
}

impl BookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::NonFiction => "non-fiction",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for BookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Book ────────────────────────────────────────────────────────────────────

/// A catalogue entry as returned by `GET /books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub book_type: BookType,
    pub available: bool,
}
