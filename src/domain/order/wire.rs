//! Wire types for the order endpoints.

use serde::{Deserialize, Serialize};

use crate::shared::OrderId;

/// `POST /orders/` body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest<'a> {
    pub book_id: u64,
    pub customer_name: &'a str,
}

/// `POST /orders/` response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderResponse {
    #[serde(default)]
    pub created: bool,
    pub order_id: OrderId,
}

/// `PATCH /orders/{id}` body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest<'a> {
    pub customer_name: &'a str,
}

/// The only field `GET /orders` is relied on to carry for every entry.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderSummary {
    pub id: OrderId,
}
