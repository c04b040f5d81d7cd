//! Orders sub-client — list, submit, fetch, update, delete.
//!
//! Every call reads the credential from the client's store right before the
//! request instead of holding a token in memory, so a token refreshed by an
//! earlier call (or another process sharing the store) is always picked up.
//! The cost is one store read per request. When the store is empty the
//! request goes out without an `Authorization` header and the server rejects
//! it; call `client.auth().token()` first.

use tracing::{info, warn};

use crate::client::BooksClient;
use crate::domain::order::wire::{
    OrderSummary, SubmitOrderRequest, SubmitOrderResponse, UpdateOrderRequest,
};
use crate::domain::order::{pick_order, DeleteOutcome, Order};
use crate::error::SdkError;
use crate::shared::OrderId;

pub struct Orders<'a> {
    pub(crate) client: &'a BooksClient,
}

impl<'a> Orders<'a> {
    /// All orders created by the current API client, in server order.
    pub async fn list(&self) -> Result<Vec<Order>, SdkError> {
        let token = self.stored_token().await?;
        let orders: Vec<Order> = self.client.http.get("/orders", token.as_deref()).await?;
        info!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Ids of all orders, in server order.
    pub async fn list_ids(&self) -> Result<Vec<OrderId>, SdkError> {
        let token = self.stored_token().await?;
        let orders: Vec<OrderSummary> = self.client.http.get("/orders", token.as_deref()).await?;
        let ids: Vec<OrderId> = orders.into_iter().map(|o| o.id).collect();
        info!(count = ids.len(), ?ids, "Listed order ids");
        Ok(ids)
    }

    /// Fetch a single order.
    pub async fn get(&self, id: &OrderId) -> Result<Order, SdkError> {
        let token = self.stored_token().await?;
        let path = format!("/orders/{}", id.as_path_segment());
        let order: Order = self.client.http.get(&path, token.as_deref()).await?;
        info!(order_id = %order.id, customer = %order.customer_name, "Fetched order");
        Ok(order)
    }

    /// Submit an order built from the client's fixture and return it as the
    /// server stored it.
    pub async fn submit(&self) -> Result<Order, SdkError> {
        let token = self.stored_token().await?;
        let fixture = &self.client.fixture;
        let request = SubmitOrderRequest {
            book_id: fixture.book_id,
            customer_name: &fixture.customer_name,
        };

        let resp: SubmitOrderResponse = self
            .client
            .http
            .post("/orders/", &request, token.as_deref())
            .await?;
        info!(order_id = %resp.order_id, created = resp.created, "Submitted order");

        self.get(&resp.order_id).await
    }

    /// Change the customer name on one order and return the updated record.
    pub async fn rename(&self, id: &OrderId, customer_name: &str) -> Result<Order, SdkError> {
        let token = self.stored_token().await?;
        let path = format!("/orders/{}", id.as_path_segment());
        info!(order_id = %id, customer = customer_name, "Updating order");

        self.client
            .http
            .patch(&path, &UpdateOrderRequest { customer_name }, token.as_deref())
            .await?;

        self.get(id).await
    }

    /// Pick one of `ids` at random, set its customer name to the fixture's
    /// updated name, and return the re-fetched order.
    pub async fn update(&self, ids: &[OrderId]) -> Result<Order, SdkError> {
        let id = pick_order(ids, &mut rand::thread_rng())?.clone();
        let name = self.client.fixture.updated_customer_name.clone();
        self.rename(&id, &name).await
    }

    /// Delete one order. Only transport failures and store errors are
    /// returned as `Err`; a rejected delete is logged and reported in the
    /// outcome.
    pub async fn delete_by_id(&self, id: &OrderId) -> Result<DeleteOutcome, SdkError> {
        let token = self.stored_token().await?;
        let path = format!("/orders/{}", id.as_path_segment());
        info!(order_id = %id, "Deleting order");

        let status = self.client.http.delete(&path, token.as_deref()).await?;
        let outcome = DeleteOutcome::new(id.clone(), status.as_u16());
        if outcome.deleted {
            info!(order_id = %id, status = outcome.status, "Order deleted");
        } else {
            warn!(order_id = %id, status = outcome.status, "Order delete rejected");
        }
        Ok(outcome)
    }

    /// Pick one of `ids` at random and delete it.
    pub async fn delete(&self, ids: &[OrderId]) -> Result<DeleteOutcome, SdkError> {
        let id = pick_order(ids, &mut rand::thread_rng())?.clone();
        self.delete_by_id(&id).await
    }

    async fn stored_token(&self) -> Result<Option<String>, SdkError> {
        Ok(self.client.store.load().await?.map(|c| c.token))
    }
}
