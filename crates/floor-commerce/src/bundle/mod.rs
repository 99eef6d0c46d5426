//! Set-bundle calculations.
//!
//! A flooring "set bundle" pairs a floor product with optional
//! insulation underlay and baseboard trim. Given a customer's desired
//! floor area, `quantity` derives whole-package counts per member and
//! `pricing` derives the bundled totals and savings.

mod line_item;
mod pricing;
mod quantity;
mod selection;

pub use line_item::BundleLineItem;
pub use pricing::{bundle_prices, BundlePricing, BundleRole, LinePricing};
pub use quantity::{
    baseboard_quantity, bundle_quantities, floor_quantity, insulation_quantity,
    BundleQuantities, FloorQuantity, PackageQuantity, DEFAULT_BASEBOARD_RATIO,
};
pub use selection::{BundleSelection, Inclusion, MemberSelection};
