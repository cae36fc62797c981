use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vesta_core::{session::Session, ClientResult};

/// Terminal outcome of a payment attempt, as recorded remotely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success,
    Failed,
}

/// Payment attempt persisted to the remote audit trail.
///
/// Failures are recorded too; the trail is complete regardless of gateway
/// outcome, which is why the payment id is optional: a session that never
/// authorized has none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRecord {
    pub gateway_payment_id: Option<String>,
    pub amount_minor: i64,
    pub currency: String,
    pub outcome: PaymentOutcome,
}

/// Remote payment-record access.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Persist a payment outcome, success or failure. Must complete (or be
    /// reported failed) before any order-creation attempt.
    async fn record_payment(
        &self,
        session: &Session,
        record: &PaymentRecord,
    ) -> ClientResult<String>;
}
