//! Order line serialization for calculated bundles.

use crate::bundle::{BundleRole, LinePricing};
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bundle pricing line serialized for order submission.
///
/// Carries the original and charged per-unit prices alongside the
/// computed line savings so invoices and audits can reconstruct how the
/// bundle price came about. Monetary values are rounded to currency
/// precision here, at the serialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleLineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Bundle member role.
    pub role: BundleRole,
    /// Whole packages purchased.
    pub packages: u32,
    /// Realized amount in `unit_label` units.
    pub amount: Decimal,
    /// Display unit for the amount.
    pub unit_label: String,
    /// Per-unit price actually charged.
    pub charged_unit_price: Money,
    /// Original (regular) per-unit price.
    pub regular_unit_price: Money,
    /// Line total at the charged price.
    pub total: Money,
    /// Savings on this line against the regular price.
    pub savings: Money,
}

impl BundleLineItem {
    /// Build an order line from a pricing line.
    pub fn from_pricing(line: &LinePricing) -> Self {
        let total = line.total.rounded();
        let comparison = line.comparison_total.rounded();
        let raw_savings = comparison.subtract(&total);
        let savings = if raw_savings.is_negative() {
            Money::zero(total.currency)
        } else {
            raw_savings
        };
        Self {
            id: LineItemId::generate(),
            product_id: line.product_id.clone(),
            product_name: line.product_name.clone(),
            role: line.role,
            packages: line.packages,
            amount: line.amount,
            unit_label: line.unit_label.clone(),
            charged_unit_price: line.unit_price.rounded(),
            regular_unit_price: line.regular_unit_price.rounded(),
            total,
            savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{bundle_quantities, bundle_prices, BundleSelection, MemberSelection};
    use crate::catalog::Product;
    use crate::money::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_items_carry_audit_prices() {
        let floor = Product::new(
            "LAM-01",
            "Oak Laminate",
            "oak-laminate",
            Money::new(dec!(12.50), Currency::EUR),
            dec!(2.22),
            "m\u{b2}",
        );
        let underlay = Product::new(
            "INS-01",
            "Underlay",
            "underlay",
            Money::new(dec!(2.95), Currency::EUR),
            dec!(5),
            "m\u{b2}",
        );
        let selection = BundleSelection::new(floor, dec!(19.5))
            .with_insulation(MemberSelection::standard(underlay));

        let quantities = bundle_quantities(&selection).unwrap();
        let pricing = bundle_prices(&quantities, &selection).unwrap();
        let items = pricing.to_line_items();

        assert_eq!(items.len(), 2);

        let floor_item = &items[0];
        assert_eq!(floor_item.role, BundleRole::Floor);
        assert_eq!(floor_item.packages, 9);
        assert_eq!(floor_item.total.amount, dec!(249.75));
        assert!(floor_item.savings.is_zero());

        // The free underlay records its regular price and the savings:
        // 4 packages covering 20 m² at 2.95 €/m² in the comparison.
        let underlay_item = &items[1];
        assert!(underlay_item.charged_unit_price.is_zero());
        assert_eq!(underlay_item.regular_unit_price.amount, dec!(2.95));
        assert_eq!(underlay_item.amount, dec!(20));
        assert_eq!(underlay_item.savings.amount, dec!(59.00));

        // Round-trips through serde for order submission.
        let json = serde_json::to_string(floor_item).unwrap();
        let back: BundleLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, floor_item);
    }
}
