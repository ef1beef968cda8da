//! Product catalog domain module.
//!
//! This crate contains business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod form;
pub mod product;

pub use form::{NewProduct, ProductForm, validate_product};
pub use product::{Product, ProductId, StockStatus};
