pub mod availability;
pub mod models;
pub mod service;
pub mod store;

pub use availability::{evaluate, CartSummary, LineAvailability, LOW_STOCK_MAX};
pub use models::CartLine;
pub use service::CartService;
pub use store::{CartStore, QuantityDelta};
