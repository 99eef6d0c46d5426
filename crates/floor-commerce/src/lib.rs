//! Flooring e-commerce domain types and set-bundle calculations.
//!
//! This crate provides the calculation core behind the storefront's
//! set-bundle configurator:
//!
//! - **Catalog**: flooring products with per-unit prices and
//!   package-content metadata
//! - **Bundle**: whole-package quantity derivation and bundle pricing
//!   with regular-price comparison and savings
//! - **Numeric**: the shared decimal-safe arithmetic both the
//!   storefront calculator and the product-entry widget route through
//!
//! # Example
//!
//! ```rust
//! use floor_commerce::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let floor = Product::new(
//!     "LAM-OAK-01",
//!     "Oak Laminate 8mm",
//!     "oak-laminate-8mm",
//!     Money::new(dec!(12.50), Currency::EUR),
//!     dec!(2.22),
//!     "m\u{b2}",
//! );
//! let underlay = Product::new(
//!     "INS-ECO-01",
//!     "Eco Underlay",
//!     "eco-underlay",
//!     Money::new(dec!(2.95), Currency::EUR),
//!     dec!(5),
//!     "m\u{b2}",
//! );
//!
//! // 19.5 m² wanted; the standard underlay ships free with the set.
//! let selection = BundleSelection::new(floor, dec!(19.5))
//!     .with_insulation(MemberSelection::standard(underlay));
//!
//! let quantities = bundle_quantities(&selection)?;
//! assert_eq!(quantities.floor.quantity.packages, 9);
//!
//! let pricing = bundle_prices(&quantities, &selection)?;
//! assert!(pricing.has_savings());
//! println!("Total: {}", pricing.rounded().bundle_total);
//! # Ok::<(), floor_commerce::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod numeric;

pub mod bundle;
pub mod catalog;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductStatus};

    // Bundle
    pub use crate::bundle::{
        baseboard_quantity, bundle_prices, bundle_quantities, floor_quantity,
        insulation_quantity, BundleLineItem, BundlePricing, BundleQuantities, BundleRole,
        BundleSelection, FloorQuantity, Inclusion, LinePricing, MemberSelection,
        PackageQuantity, DEFAULT_BASEBOARD_RATIO,
    };

    // Numeric
    pub use crate::numeric::{packages_needed, parse_price, precise_multiply, precise_round};
}
