use std::sync::Arc;

use vesta_core::{session::Session, ClientError, ClientResult};

use crate::models::CartLine;
use crate::service::CartService;

/// Direction of a quantity stepper click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityDelta {
    Increment,
    Decrement,
}

/// Authoritative local view of the shopper's cart.
///
/// Every mutating call ends with a fresh `load()`, whether the mutation
/// succeeded or not, so the visible snapshot trails server truth by at most
/// one resync. There is no optimistic local merge; concurrent stock changes
/// on the server win.
pub struct CartStore {
    service: Arc<dyn CartService>,
    session: Session,
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new(service: Arc<dyn CartService>, session: Session) -> Self {
        Self {
            service,
            session,
            lines: Vec::new(),
        }
    }

    /// Current snapshot, for rendering and for the availability evaluator.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Fetch all cart lines for the current identity. On failure the prior
    /// snapshot is left untouched and the error is returned for the caller
    /// to surface as a notice.
    pub async fn load(&mut self) -> ClientResult<()> {
        let fetched = self.service.list_cart(&self.session).await?;
        self.lines = fetched;
        Ok(())
    }

    /// Step a line's quantity by one. The absolute desired quantity is sent
    /// so the server does the clamping against stock; decrementing from 1
    /// requests quantity 0, which removes the line by server convention.
    pub async fn set_quantity(
        &mut self,
        line_id: i64,
        delta: QuantityDelta,
    ) -> ClientResult<String> {
        let line = self
            .lines
            .iter()
            .find(|l| l.id == line_id)
            .ok_or_else(|| ClientError::service(format!("cart line {line_id} not found")))?;

        let desired = match delta {
            QuantityDelta::Increment => line.quantity.saturating_add(1),
            QuantityDelta::Decrement => line.quantity.saturating_sub(1),
        };
        let product_id = line.product.id;

        let result = self
            .service
            .update_quantity(&self.session, product_id, desired)
            .await;
        self.resync().await;
        result
    }

    /// Remove a line. The snapshot is resynced even when the delete fails so
    /// the view reflects server truth; the failure message still goes back
    /// to the caller.
    pub async fn remove(&mut self, line_id: i64) -> ClientResult<String> {
        let result = self.service.delete_line(&self.session, line_id).await;
        self.resync().await;
        result
    }

    async fn resync(&mut self) {
        if let Err(err) = self.load().await {
            tracing::warn!("cart resync failed, keeping previous snapshot: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use vesta_catalog::Product;

    fn product(id: i64, price: &str, stock: i64) -> Product {
        Product {
            id,
            product_name: format!("Product {id}"),
            original_price: price.to_string(),
            discount_price: price.to_string(),
            product_image: String::new(),
            short_description: String::new(),
            stock,
        }
    }

    fn line(id: i64, product_id: i64, quantity: u32) -> CartLine {
        CartLine {
            id,
            product: product(product_id, "100.00", 5),
            quantity,
        }
    }

    /// Server-side cart that applies the quantity-0-removes convention and
    /// records the quantities it was asked for.
    struct FakeCart {
        lines: Mutex<Vec<CartLine>>,
        requested_quantities: Mutex<Vec<u32>>,
        fail_mutations: bool,
        fail_list: Mutex<bool>,
    }

    impl FakeCart {
        fn with_lines(lines: Vec<CartLine>) -> Self {
            Self {
                lines: Mutex::new(lines),
                requested_quantities: Mutex::new(Vec::new()),
                fail_mutations: false,
                fail_list: Mutex::new(false),
            }
        }
    }

    #[async_trait]
    impl CartService for FakeCart {
        async fn list_cart(&self, _session: &Session) -> ClientResult<Vec<CartLine>> {
            if *self.fail_list.lock().unwrap() {
                return Err(ClientError::Transport("connection reset".to_string()));
            }
            Ok(self.lines.lock().unwrap().clone())
        }

        async fn update_quantity(
            &self,
            _session: &Session,
            product_id: i64,
            quantity: u32,
        ) -> ClientResult<String> {
            self.requested_quantities.lock().unwrap().push(quantity);
            if self.fail_mutations {
                return Err(ClientError::service("Product is out of stock"));
            }
            let mut lines = self.lines.lock().unwrap();
            if quantity == 0 {
                lines.retain(|l| l.product.id != product_id);
            } else if let Some(l) = lines.iter_mut().find(|l| l.product.id == product_id) {
                l.quantity = quantity;
            }
            Ok("Cart updated".to_string())
        }

        async fn delete_line(&self, _session: &Session, line_id: i64) -> ClientResult<String> {
            if self.fail_mutations {
                // Another session already removed the line; server truth
                // changed regardless of the failure.
                self.lines.lock().unwrap().retain(|l| l.id != line_id);
                return Err(ClientError::service("Item not found in cart"));
            }
            self.lines.lock().unwrap().retain(|l| l.id != line_id);
            Ok("Item removed from cart".to_string())
        }
    }

    #[tokio::test]
    async fn test_load_failure_keeps_prior_snapshot() {
        let fake = Arc::new(FakeCart::with_lines(vec![line(1, 10, 2)]));
        let mut store = CartStore::new(fake.clone(), Session::authenticated("tok"));

        store.load().await.unwrap();
        assert_eq!(store.lines().len(), 1);

        *fake.fail_list.lock().unwrap() = true;
        assert!(store.load().await.is_err());
        // Prior state survives a failed refresh.
        assert_eq!(store.lines().len(), 1);
    }

    #[tokio::test]
    async fn test_decrement_from_one_requests_zero_and_drops_line() {
        let fake = Arc::new(FakeCart::with_lines(vec![line(1, 10, 1)]));
        let mut store = CartStore::new(fake.clone(), Session::authenticated("tok"));
        store.load().await.unwrap();

        store.set_quantity(1, QuantityDelta::Decrement).await.unwrap();

        assert_eq!(*fake.requested_quantities.lock().unwrap(), vec![0]);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_increment_sends_absolute_quantity() {
        let fake = Arc::new(FakeCart::with_lines(vec![line(1, 10, 2)]));
        let mut store = CartStore::new(fake.clone(), Session::authenticated("tok"));
        store.load().await.unwrap();

        store.set_quantity(1, QuantityDelta::Increment).await.unwrap();

        assert_eq!(*fake.requested_quantities.lock().unwrap(), vec![3]);
        assert_eq!(store.lines()[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_failed_remove_still_resyncs_to_server_truth() {
        let mut fake = FakeCart::with_lines(vec![line(1, 10, 2), line(2, 11, 1)]);
        fake.fail_mutations = true;
        let fake = Arc::new(fake);
        let mut store = CartStore::new(fake.clone(), Session::authenticated("tok"));
        store.load().await.unwrap();

        let result = store.remove(1).await;
        assert!(result.is_err());
        // The error is surfaced, but the snapshot matches the server anyway.
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].id, 2);
    }

    #[tokio::test]
    async fn test_unknown_line_is_a_service_error() {
        let fake = Arc::new(FakeCart::with_lines(vec![]));
        let mut store = CartStore::new(fake, Session::authenticated("tok"));
        store.load().await.unwrap();

        let result = store.set_quantity(99, QuantityDelta::Increment).await;
        assert!(matches!(result, Err(ClientError::Service(_))));
    }
}
