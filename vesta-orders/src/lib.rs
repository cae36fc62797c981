pub mod models;
pub mod progress;
pub mod service;
pub mod viewer;

pub use models::{OrderDetail, OrderPayment, OrderStatus, OrderSummary, ShipmentSnapshot};
pub use service::{CreateOrderRequest, OrderService};
pub use viewer::OrderLifecycleViewer;
