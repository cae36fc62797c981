use serde::{Deserialize, Serialize};
use vesta_catalog::Product;

/// One product entry with a quantity in the shopper's cart, as returned by
/// the remote cart service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub id: i64,
    pub product: Product,
    pub quantity: u32,
}
