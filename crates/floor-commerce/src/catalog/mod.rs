//! Product catalog module.
//!
//! Contains the flooring product type and its status lifecycle.

mod product;

pub use product::{Product, ProductStatus};
