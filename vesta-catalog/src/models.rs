use serde::{Deserialize, Serialize};

/// A sellable product as the storefront service describes it.
///
/// Prices travel as decimal strings on this wire; conversion to minor units
/// happens in `vesta_core::money` only when a charge is frozen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub original_price: String,
    pub discount_price: String,
    #[serde(default)]
    pub product_image: String,
    #[serde(default)]
    pub short_description: String,
    pub stock: i64,
}

/// Catalog facet used by listing filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorRef {
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeRef {
    pub size: String,
}

/// A concrete purchasable variation (product + color + size), as referenced
/// by orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariation {
    pub id: i64,
    pub product_name: String,
    pub color: ColorRef,
    pub size: SizeRef,
    #[serde(default)]
    pub product_image: String,
}
