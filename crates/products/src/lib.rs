//! Products domain module (catalog records and query filters).
//!
//! This crate contains the catalog data model and filter semantics, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod product;
pub mod seed;

pub use filter::ProductFilter;
pub use product::{NewProduct, Product, Rating};
pub use seed::nike_catalog;
