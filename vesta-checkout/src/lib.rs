pub mod gateway;
pub mod orchestrator;
pub mod payment;
pub mod shipment;

pub use gateway::{GatewayOutcome, GatewayPrefill, GatewaySession, PaymentGateway};
pub use orchestrator::{
    CheckoutError, CheckoutOrchestrator, CheckoutState, Completion, Selection,
};
pub use payment::{PaymentOutcome, PaymentRecord, PaymentService};
pub use shipment::{
    ConfirmedAddress, ShipmentAddress, ShipmentAddressManager, ShipmentService, SubmitOutcome,
};
