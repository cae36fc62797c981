use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vesta_core::{session::Session, ClientResult};

/// Postal address record, one per identity.
///
/// All fields decode to empty strings rather than null so form inputs stay
/// controlled; which fields constitute a valid destination is the remote
/// service's call, surfaced verbatim on rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShipmentAddress {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub flat_building_no: String,
    pub city: String,
    pub pincode: String,
    pub state: String,
    pub country: String,
}

/// Result of the idempotent address upsert. The remote service signals
/// create-or-update via HTTP 201 vs 200; both are success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Updated(String),
}

impl SubmitOutcome {
    /// Confirmation message for the notice.
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Created(msg) | SubmitOutcome::Updated(msg) => msg,
        }
    }
}

/// Remote shipment-address access.
#[async_trait]
pub trait ShipmentService: Send + Sync {
    async fn fetch_address(&self, session: &Session) -> ClientResult<ShipmentAddress>;

    /// Upsert the address. Create and update are both success.
    async fn submit_address(
        &self,
        session: &Session,
        address: &ShipmentAddress,
    ) -> ClientResult<SubmitOutcome>;
}

/// Proof that an address submit resolved successfully.
///
/// This is the admission ticket into payment: the orchestrator refuses to
/// open a gateway session without one, and the only way to obtain one is
/// through `ShipmentAddressManager::submit`.
#[derive(Debug, Clone)]
pub struct ConfirmedAddress {
    address: ShipmentAddress,
    message: String,
}

impl ConfirmedAddress {
    pub fn address(&self) -> &ShipmentAddress {
        &self.address
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fetches, prefills, and submits the shipment address for the checkout
/// surface.
pub struct ShipmentAddressManager {
    service: Arc<dyn ShipmentService>,
    session: Session,
    address: ShipmentAddress,
}

impl ShipmentAddressManager {
    pub fn new(service: Arc<dyn ShipmentService>, session: Session) -> Self {
        Self {
            service,
            session,
            address: ShipmentAddress::default(),
        }
    }

    pub fn address(&self) -> &ShipmentAddress {
        &self.address
    }

    /// Replace the working copy with the shopper's edits.
    pub fn set_address(&mut self, address: ShipmentAddress) {
        self.address = address;
    }

    /// Prefill from the stored address. On failure the empty-string defaults
    /// stay in place and the error is returned for a notice; the form is
    /// still usable.
    pub async fn load(&mut self) -> ClientResult<()> {
        let fetched = self.service.fetch_address(&self.session).await?;
        self.address = fetched;
        Ok(())
    }

    /// Submit the working copy. Must be awaited to completion before any
    /// gateway handshake: the returned `ConfirmedAddress` is the only
    /// admission ticket the orchestrator accepts.
    pub async fn submit(&mut self) -> ClientResult<ConfirmedAddress> {
        let outcome = self
            .service
            .submit_address(&self.session, &self.address)
            .await?;
        Ok(ConfirmedAddress {
            address: self.address.clone(),
            message: outcome.message().to_string(),
        })
    }
}
