use std::sync::Arc;

use vesta_core::{session::Session, ClientResult};

use crate::models::{OrderDetail, OrderSummary};
use crate::service::OrderService;

/// Read-only projection of the shopper's order history.
///
/// The list is fetched eagerly; a single order's full detail is fetched only
/// when opened, avoiding a fan-out of detail requests for every row.
pub struct OrderLifecycleViewer {
    service: Arc<dyn OrderService>,
    session: Session,
    orders: Vec<OrderSummary>,
    detail: Option<OrderDetail>,
}

impl OrderLifecycleViewer {
    pub fn new(service: Arc<dyn OrderService>, session: Session) -> Self {
        Self {
            service,
            session,
            orders: Vec::new(),
            detail: None,
        }
    }

    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }

    pub fn detail(&self) -> Option<&OrderDetail> {
        self.detail.as_ref()
    }

    /// Refresh the order list. On failure the previous list (initially
    /// empty) stays in place and the error goes back to the caller.
    pub async fn list(&mut self) -> ClientResult<()> {
        let fetched = self.service.list_orders(&self.session).await?;
        self.orders = fetched;
        Ok(())
    }

    /// Fetch one order's full projection. A failed fetch leaves the detail
    /// unset and is logged rather than surfaced; the list view stays usable.
    pub async fn open_detail(&mut self, order_id: i64) {
        match self.service.order_detail(&self.session, order_id).await {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => {
                tracing::warn!("failed to fetch detail for order {order_id}: {err}");
                self.detail = None;
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
