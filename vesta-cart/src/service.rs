use async_trait::async_trait;
use vesta_core::{session::Session, ClientResult};

use crate::models::CartLine;

/// Remote cart access. The server is the single source of truth for stock
/// clamping, which is why `update_quantity` takes the absolute desired
/// quantity rather than a delta.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn list_cart(&self, session: &Session) -> ClientResult<Vec<CartLine>>;

    /// Set the absolute quantity for a product. Quantity 0 removes the line
    /// by server convention.
    async fn update_quantity(
        &self,
        session: &Session,
        product_id: i64,
        quantity: u32,
    ) -> ClientResult<String>;

    /// Delete a cart line by id. Returns the server's confirmation message.
    async fn delete_line(&self, session: &Session, line_id: i64) -> ClientResult<String>;
}
