use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vesta_core::{session::Session, ClientResult};

use crate::models::{OrderDetail, OrderSummary};

/// Request that converts a recorded successful payment into an order.
///
/// The remote side is idempotent per gateway payment id; the client's part
/// of the bargain is to issue at most one creation call per payment success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub gateway_payment_id: String,
    pub variation_id: i64,
    pub quantity: u32,
}

/// Remote order access. Orders are never mutated or deleted client-side;
/// creation is the single call that touches remote inventory/order state.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// All orders for the identity. Implementations must tolerate a
    /// malformed payload by degrading to an empty list.
    async fn list_orders(&self, session: &Session) -> ClientResult<Vec<OrderSummary>>;

    async fn order_detail(&self, session: &Session, order_id: i64) -> ClientResult<OrderDetail>;

    /// Create an order from a recorded successful payment. Returns the new
    /// order id. Never retried by the client.
    async fn create_order(
        &self,
        session: &Session,
        request: &CreateOrderRequest,
    ) -> ClientResult<i64>;
}
