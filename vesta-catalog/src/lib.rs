pub mod models;
pub mod service;

pub use models::{Category, ColorRef, Product, ProductVariation, SizeRef};
pub use service::{load_categories, CatalogService};
