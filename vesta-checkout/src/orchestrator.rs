use std::sync::Arc;

use uuid::Uuid;
use vesta_core::{money, session::Session};
use vesta_orders::{CreateOrderRequest, OrderService};

use crate::gateway::{GatewayOutcome, GatewayPrefill, GatewaySession, PaymentGateway};
use crate::payment::{PaymentOutcome, PaymentRecord, PaymentService};
use crate::shipment::ConfirmedAddress;

/// States of the checkout flow, in the only order they may be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    AddressConfirmed,
    GatewayOpened,
    PaymentSucceeded,
    PaymentFailed,
    PaymentRecorded,
    OrderCreated,
    OrderCreationFailed,
}

impl CheckoutState {
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "Idle",
            CheckoutState::AddressConfirmed => "AddressConfirmed",
            CheckoutState::GatewayOpened => "GatewayOpened",
            CheckoutState::PaymentSucceeded => "PaymentSucceeded",
            CheckoutState::PaymentFailed => "PaymentFailed",
            CheckoutState::PaymentRecorded => "PaymentRecorded",
            CheckoutState::OrderCreated => "OrderCreated",
            CheckoutState::OrderCreationFailed => "OrderCreationFailed",
        }
    }
}

/// What the shopper chose to buy, captured at checkout-open time. The charge
/// is computed from these values and from nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub product_name: String,
    pub variation_id: i64,
    pub unit_price: String,
    pub quantity: u32,
}

/// How a completed (non-discarded) checkout session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Payment succeeded, recorded, and converted into an order. The caller
    /// refreshes cart/order views and closes the checkout surface.
    OrderCreated { order_id: i64 },
    /// Payment failed at the gateway; the failure was still recorded.
    PaymentFailed { reason: String },
    /// The outcome arrived after the orchestrator was dismissed and was
    /// silently dropped.
    Discarded,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("payment gateway unavailable: {0}")]
    GatewayUnavailable(String),

    #[error("could not compute charge: {0}")]
    Charge(String),

    #[error("failed to record payment: {0}")]
    RecordingFailed(String),

    #[error("order creation failed: {0}")]
    OrderCreationFailed(String),
}

/// Charge details frozen when the address is confirmed. No cart or product
/// state is re-read after this point, so a cart mutation racing the checkout
/// cannot alter the amount.
#[derive(Debug, Clone)]
struct FrozenCharge {
    amount_minor: i64,
    description: String,
    receipt: Uuid,
    variation_id: i64,
    quantity: u32,
    prefill: GatewayPrefill,
}

/// Drives one checkout session from address confirmation through gateway
/// handshake, payment recording, and order creation.
///
/// Steps are totally ordered even though each is asynchronous: a later step
/// never starts until the prior step's result is observed. All terminal
/// failures resolve to an error for the caller's notice; nothing here
/// panics past its boundary.
pub struct CheckoutOrchestrator {
    gateway: Arc<dyn PaymentGateway>,
    payments: Arc<dyn PaymentService>,
    orders: Arc<dyn OrderService>,
    session: Session,
    currency: String,
    gateway_key_id: String,
    state: CheckoutState,
    charge: Option<FrozenCharge>,
    dismissed: bool,
}

impl CheckoutOrchestrator {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        payments: Arc<dyn PaymentService>,
        orders: Arc<dyn OrderService>,
        session: Session,
        currency: impl Into<String>,
        gateway_key_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            payments,
            orders,
            session,
            currency: currency.into(),
            gateway_key_id: gateway_key_id.into(),
            state: CheckoutState::Idle,
            charge: None,
            dismissed: false,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Frozen charge amount in minor units, once an address is confirmed.
    pub fn charge_amount_minor(&self) -> Option<i64> {
        self.charge.as_ref().map(|c| c.amount_minor)
    }

    /// Single admission gate into payment: requires the `ConfirmedAddress`
    /// produced by a successful address submit. Freezes the charge amount
    /// from the selection here and now.
    pub fn confirm_address(
        &mut self,
        selection: &Selection,
        confirmed: &ConfirmedAddress,
    ) -> Result<(), CheckoutError> {
        self.expect_state(CheckoutState::Idle, "AddressConfirmed")?;
        // Re-initiating after a dismissal starts a fresh, live session.
        self.dismissed = false;

        let amount_minor = money::charge_minor_units(&selection.unit_price, selection.quantity)
            .map_err(|err| CheckoutError::Charge(err.to_string()))?;

        let address = confirmed.address();
        self.charge = Some(FrozenCharge {
            amount_minor,
            description: format!("Purchase of {}", selection.product_name),
            receipt: Uuid::new_v4(),
            variation_id: selection.variation_id,
            quantity: selection.quantity,
            prefill: GatewayPrefill {
                name: address.name.clone(),
                email: address.email.clone(),
                phone: address.phone.clone(),
            },
        });
        self.transition(CheckoutState::AddressConfirmed);
        Ok(())
    }

    /// Open the gateway session with the frozen charge. If the gateway
    /// cannot be opened at all, the flow fails closed and returns to idle;
    /// there is no fallback that skips authorization.
    ///
    /// The returned outcome is the session's single terminal callback; the
    /// caller hands it to [`complete`](Self::complete).
    pub async fn open_gateway(&mut self) -> Result<GatewayOutcome, CheckoutError> {
        self.expect_state(CheckoutState::AddressConfirmed, "GatewayOpened")?;
        let charge = self.frozen_charge("GatewayOpened")?;

        let gateway_session = GatewaySession {
            key_id: self.gateway_key_id.clone(),
            amount_minor: charge.amount_minor,
            currency: self.currency.clone(),
            receipt: charge.receipt,
            description: charge.description.clone(),
            prefill: charge.prefill.clone(),
        };

        match self.gateway.open(&gateway_session).await {
            Ok(outcome) => {
                self.transition(CheckoutState::GatewayOpened);
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!("payment gateway could not be opened: {err}");
                self.abort();
                Err(CheckoutError::GatewayUnavailable(err.to_string()))
            }
        }
    }

    /// Tear the checkout surface down. Any gateway outcome that arrives
    /// afterwards is discarded instead of mutating dead state; the next
    /// `confirm_address` starts a live session again.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
        self.state = CheckoutState::Idle;
        self.charge = None;
    }

    /// Return to `Idle` for a fresh attempt after a terminal outcome.
    pub fn reset(&mut self) {
        self.dismissed = false;
        self.state = CheckoutState::Idle;
        self.charge = None;
    }

    /// Apply the gateway callback: record the payment outcome (success and
    /// failure alike), then issue the single order-creation call for a
    /// recorded success only.
    pub async fn complete(
        &mut self,
        outcome: GatewayOutcome,
    ) -> Result<Completion, CheckoutError> {
        if self.dismissed {
            tracing::info!("discarding gateway outcome after checkout dismissal");
            return Ok(Completion::Discarded);
        }

        let to = match &outcome {
            GatewayOutcome::Success { .. } => "PaymentSucceeded",
            GatewayOutcome::Failed { .. } => "PaymentFailed",
        };
        self.expect_state(CheckoutState::GatewayOpened, to)?;
        let charge = self.frozen_charge(to)?.clone();

        let record = match &outcome {
            GatewayOutcome::Success { payment_id } => {
                self.transition(CheckoutState::PaymentSucceeded);
                PaymentRecord {
                    gateway_payment_id: Some(payment_id.clone()),
                    amount_minor: charge.amount_minor,
                    currency: self.currency.clone(),
                    outcome: PaymentOutcome::Success,
                }
            }
            GatewayOutcome::Failed { reason } => {
                tracing::info!("payment failed at gateway: {reason}");
                self.transition(CheckoutState::PaymentFailed);
                PaymentRecord {
                    gateway_payment_id: None,
                    amount_minor: charge.amount_minor,
                    currency: self.currency.clone(),
                    outcome: PaymentOutcome::Failed,
                }
            }
        };

        // The audit trail comes first: no order creation until the record
        // call has completed, and a failed record call is itself terminal.
        if let Err(err) = self.payments.record_payment(&self.session, &record).await {
            tracing::error!("failed to record payment outcome: {err}");
            self.abort();
            return Err(CheckoutError::RecordingFailed(err.to_string()));
        }
        self.transition(CheckoutState::PaymentRecorded);

        let payment_id = match outcome {
            GatewayOutcome::Failed { reason } => {
                return Ok(Completion::PaymentFailed { reason });
            }
            GatewayOutcome::Success { payment_id } => payment_id,
        };

        let request = CreateOrderRequest {
            gateway_payment_id: payment_id,
            variation_id: charge.variation_id,
            quantity: charge.quantity,
        };
        match self.orders.create_order(&self.session, &request).await {
            Ok(order_id) => {
                self.transition(CheckoutState::OrderCreated);
                Ok(Completion::OrderCreated { order_id })
            }
            Err(err) => {
                tracing::error!("order creation failed after recorded payment: {err}");
                self.transition(CheckoutState::OrderCreationFailed);
                Err(CheckoutError::OrderCreationFailed(err.to_string()))
            }
        }
    }

    fn expect_state(
        &self,
        expected: CheckoutState,
        to: &'static str,
    ) -> Result<(), CheckoutError> {
        if self.state != expected {
            return Err(CheckoutError::InvalidTransition {
                from: self.state.name(),
                to,
            });
        }
        Ok(())
    }

    fn frozen_charge(&self, to: &'static str) -> Result<&FrozenCharge, CheckoutError> {
        self.charge.as_ref().ok_or(CheckoutError::InvalidTransition {
            from: self.state.name(),
            to,
        })
    }

    fn transition(&mut self, to: CheckoutState) {
        tracing::info!("checkout {} -> {}", self.state.name(), to.name());
        self.state = to;
    }

    fn abort(&mut self) {
        self.state = CheckoutState::Idle;
        self.charge = None;
    }
}
