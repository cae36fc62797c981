use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vesta_catalog::ProductVariation;

/// Order status in the lifecycle.
///
/// Transitions are monotonic forward except the Cancelled escape hatch from
/// Processing; only the remote order service mutates them. The wire uses the
/// human spellings, including the spaced "Out For Delivery".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Shipped,
    #[serde(rename = "Out For Delivery")]
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire/display spelling.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out For Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Payment record linked to an order, as the remote service reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPayment {
    pub gateway_payment_id: String,
    pub payment_status: String,
    pub payment_date: DateTime<Utc>,
}

/// One row of the order history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_id: i64,
    pub product_variation: ProductVariation,
    pub quantity: u32,
    pub total_amount: String,
    pub order_status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub order_status_date: DateTime<Utc>,
}

/// Shipment address snapshot attached to an order projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShipmentSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub flat_building_no: String,
    pub city: String,
    pub pincode: String,
    pub state: String,
    pub country: String,
}

/// Full projection of a single order, fetched on demand when the shopper
/// opens it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetail {
    pub order_id: i64,
    pub product_variation: ProductVariation,
    pub payment: OrderPayment,
    pub quantity: u32,
    pub total_amount: String,
    pub order_status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub order_status_date: DateTime<Utc>,
    #[serde(default)]
    pub shipment: Option<ShipmentSnapshot>,
}
