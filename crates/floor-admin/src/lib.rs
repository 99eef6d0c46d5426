//! Product-entry price field calculator.
//!
//! When an operator maintains a flooring product, several price fields
//! derive from others: the package price follows from the unit price
//! and the package content, the waste-adjusted unit price follows from
//! the waste percentage, and the sale package price follows from a sale
//! unit price. This crate keeps those derived fields consistent.
//!
//! Historically this logic lived in a browser-side script with
//! module-level globals (a debug flag, a "user is typing" flag, a cache
//! of original field values) and imperative event listeners. Here the
//! configuration is explicit ([`FieldCalcConfig`]), the field state is
//! an owned map inside [`PriceFieldCalculator`], and the two event
//! flavors are two named methods: [`PriceFieldCalculator::apply_input`]
//! for keystroke-driven recomputes and
//! [`PriceFieldCalculator::apply_sale_price_change`] for the distinct
//! sale-price change event, whose clearing behavior differs.
//!
//! All arithmetic routes through `floor_commerce::numeric`, the same
//! decimal-safe helpers the storefront bundle calculator uses.

mod fields;

pub use fields::{DerivedPrices, FieldCalcConfig, PriceField, PriceFieldCalculator};
