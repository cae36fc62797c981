use async_trait::async_trait;
use uuid::Uuid;
use vesta_core::ClientResult;

/// Identity details prefilled into the gateway widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayPrefill {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One opened instance of the external payment widget.
///
/// The amount is already in the gateway's minor-unit representation and is
/// frozen before the session is built; the receipt is a client-generated
/// reference for the gateway's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySession {
    /// Public key id selecting the merchant account at the gateway.
    pub key_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub receipt: Uuid,
    pub description: String,
    pub prefill: GatewayPrefill,
}

/// The single terminal callback of a gateway session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    Success { payment_id: String },
    Failed { reason: String },
}

/// Narrow capability interface over the third-party payment SDK.
///
/// The concrete SDK is a pluggable adapter behind this trait; a fake adapter
/// stands in for it in tests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open one gateway session and resolve with its single terminal
    /// outcome. An `Err` means the gateway itself could not be opened
    /// (script unavailable); callers must fail closed, never treat it as
    /// an unauthenticated success.
    async fn open(&self, session: &GatewaySession) -> ClientResult<GatewayOutcome>;
}

/// Canned gateway adapter for wiring and tests.
pub struct MockGateway {
    outcome: GatewayOutcome,
}

impl MockGateway {
    pub fn succeeding(payment_id: impl Into<String>) -> Self {
        Self {
            outcome: GatewayOutcome::Success {
                payment_id: payment_id.into(),
            },
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: GatewayOutcome::Failed {
                reason: reason.into(),
            },
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn open(&self, _session: &GatewaySession) -> ClientResult<GatewayOutcome> {
        Ok(self.outcome.clone())
    }
}
