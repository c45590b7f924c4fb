//! Product catalog module.
//!
//! Contains the product type and the in-memory catalog it is loaded into.

mod product;
mod store;

pub use product::Product;
pub use store::Catalog;
