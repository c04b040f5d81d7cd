//! Order domain — orders, submission fixture, delete outcomes, id selection.

pub mod client;
pub mod wire;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::OrderId;

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order as returned by `GET /orders/{id}`. The server owns this state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub book_id: u64,
    pub customer_name: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

// ─── OrderFixture ────────────────────────────────────────────────────────────

/// Values the suite submits and patches orders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFixture {
    pub book_id: u64,
    pub customer_name: String,
    /// Customer name written by `orders().update(..)`.
    pub updated_customer_name: String,
}

impl Default for OrderFixture {
    fn default() -> Self {
        Self {
            book_id: 1,
            customer_name: "EG".to_string(),
            updated_customer_name: "Pepe el cambiaso".to_string(),
        }
    }
}

// ─── DeleteOutcome ───────────────────────────────────────────────────────────

/// Result of a delete attempt. A rejected delete is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub order_id: OrderId,
    pub status: u16,
    pub deleted: bool,
}

impl DeleteOutcome {
    pub fn new(order_id: OrderId, status: u16) -> Self {
        Self {
            order_id,
            status,
            deleted: is_delete_success(status),
        }
    }
}

/// 200 and 204 count as a successful delete; anything else does not.
pub fn is_delete_success(status: u16) -> bool {
    matches!(status, 200 | 204)
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Pick one id uniformly at random.
pub fn pick_order<'a, R>(ids: &'a [OrderId], rng: &mut R) -> Result<&'a OrderId, SdkError>
where
    R: Rng + ?Sized,
{
    ids.choose(rng).ok_or(SdkError::EmptyOrderSet)
}
