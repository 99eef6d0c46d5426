//! Bundle price calculations.
//!
//! Totals are computed at full decimal precision; rounding to currency
//! precision happens only when a result is presented or serialized into
//! line items, never between chained calculations.

use crate::bundle::line_item::BundleLineItem;
use crate::bundle::{BundleQuantities, BundleSelection, MemberSelection, PackageQuantity};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which member of the set bundle a pricing line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BundleRole {
    Floor,
    Insulation,
    Baseboard,
}

impl BundleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleRole::Floor => "floor",
            BundleRole::Insulation => "insulation",
            BundleRole::Baseboard => "baseboard",
        }
    }
}

/// Pricing breakdown for a single bundle member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Bundle member this line prices.
    pub role: BundleRole,
    /// Product ID (denormalized for order submission).
    pub product_id: crate::ids::ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Display unit for the amount.
    pub unit_label: String,
    /// Whole packages purchased.
    pub packages: u32,
    /// Realized (package-rounded) amount the customer pays for.
    pub amount: Decimal,
    /// Per-unit price actually charged. Zero for standard inclusions.
    pub unit_price: Money,
    /// Non-discounted per-unit comparison price.
    pub regular_unit_price: Money,
    /// Line total at the charged price.
    pub total: Money,
    /// Line total at the regular price over the same amount.
    pub comparison_total: Money,
}

/// Complete pricing breakdown for a set bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundlePricing {
    /// Per-member pricing lines.
    pub lines: Vec<LinePricing>,
    /// Sum of line totals at charged prices.
    pub bundle_total: Money,
    /// Sum of line totals at regular prices over the same
    /// package-rounded amounts.
    pub comparison_total: Money,
    /// `max(0, comparison_total - bundle_total)`.
    pub savings_amount: Money,
    /// Savings as a percentage of the comparison total; zero when the
    /// comparison total is zero.
    pub savings_percent: Decimal,
}

impl BundlePricing {
    /// Copy with every monetary value rounded to currency precision.
    /// For presentation; keep the unrounded value for further math.
    pub fn rounded(&self) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| LinePricing {
                    unit_price: line.unit_price.rounded(),
                    regular_unit_price: line.regular_unit_price.rounded(),
                    total: line.total.rounded(),
                    comparison_total: line.comparison_total.rounded(),
                    ..line.clone()
                })
                .collect(),
            bundle_total: self.bundle_total.rounded(),
            comparison_total: self.comparison_total.rounded(),
            savings_amount: self.savings_amount.rounded(),
            savings_percent: self.savings_percent,
        }
    }

    /// Check if the bundle is cheaper than buying at regular prices.
    pub fn has_savings(&self) -> bool {
        self.savings_amount.is_positive()
    }

    /// Serialize the lines for order submission.
    pub fn to_line_items(&self) -> Vec<BundleLineItem> {
        self.lines.iter().map(BundleLineItem::from_pricing).collect()
    }
}

/// Price a line: per-package when a sale package price overrides, else
/// charged per unit of realized coverage.
fn line_total(unit_price: Money, sale_package_price: Option<Money>, quantity: &PackageQuantity) -> Money {
    match sale_package_price {
        Some(package_price) => package_price.multiply(Decimal::from(quantity.packages)),
        None => unit_price.multiply(quantity.actual_amount),
    }
}

fn member_line(
    role: BundleRole,
    member: &MemberSelection,
    quantity: &PackageQuantity,
    currency: Currency,
) -> Result<LinePricing, CommerceError> {
    let product = &member.product;
    ensure_currency(product.unit_price.currency, currency)?;

    // Standard inclusions are free with the bundle; upgrades pay their
    // own live rate. Decided by the explicit inclusion variant, never by
    // the price being zero.
    let (unit_price, total) = if member.inclusion.is_free() {
        (Money::zero(currency), Money::zero(currency))
    } else {
        (
            product.unit_price,
            line_total(product.unit_price, product.sale_package_price, quantity),
        )
    };

    Ok(LinePricing {
        role,
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        unit_label: product.unit_label.clone(),
        packages: quantity.packages,
        amount: quantity.actual_amount,
        unit_price,
        regular_unit_price: product.regular_unit_price,
        total,
        comparison_total: product.regular_unit_price.multiply(quantity.actual_amount),
    })
}

fn ensure_currency(got: Currency, expected: Currency) -> Result<(), CommerceError> {
    if got != expected {
        return Err(CommerceError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: got.code().to_string(),
        });
    }
    Ok(())
}

/// Compute the bundled totals, the regular-price comparison, and the
/// savings for a quantity result.
///
/// The comparison total reprices every line at the product's regular
/// per-unit price over the same package-rounded amounts, so the savings
/// reflect what the customer would actually have paid, not a naive
/// unit-price delta.
pub fn bundle_prices(
    quantities: &BundleQuantities,
    selection: &BundleSelection,
) -> Result<BundlePricing, CommerceError> {
    let floor = &selection.floor;
    let currency = floor.unit_price.currency;

    let floor_quantity = &quantities.floor.quantity;
    let mut lines = vec![LinePricing {
        role: BundleRole::Floor,
        product_id: floor.id.clone(),
        product_name: floor.name.clone(),
        unit_label: floor.unit_label.clone(),
        packages: floor_quantity.packages,
        // Customers pay for whole packages, so the realized area is
        // charged, not the wanted area.
        amount: floor_quantity.actual_amount,
        unit_price: floor.unit_price,
        regular_unit_price: floor.regular_unit_price,
        total: line_total(floor.unit_price, floor.sale_package_price, floor_quantity),
        comparison_total: floor
            .regular_unit_price
            .multiply(floor_quantity.actual_amount),
    }];

    if let (Some(member), Some(quantity)) = (&selection.insulation, &quantities.insulation) {
        lines.push(member_line(BundleRole::Insulation, member, quantity, currency)?);
    }
    if let (Some(member), Some(quantity)) = (&selection.baseboard, &quantities.baseboard) {
        lines.push(member_line(BundleRole::Baseboard, member, quantity, currency)?);
    }

    let bundle_total = Money::try_sum(lines.iter().map(|l| &l.total), currency)
        .ok_or_else(|| CommerceError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: "mixed".to_string(),
        })?;
    let comparison_total = Money::try_sum(lines.iter().map(|l| &l.comparison_total), currency)
        .ok_or_else(|| CommerceError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: "mixed".to_string(),
        })?;

    let raw_savings = comparison_total.subtract(&bundle_total);
    let savings_amount = if raw_savings.is_negative() {
        Money::zero(currency)
    } else {
        raw_savings
    };
    let savings_percent = if comparison_total.is_positive() {
        savings_amount.amount / comparison_total.amount * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Ok(BundlePricing {
        lines,
        bundle_total,
        comparison_total,
        savings_amount,
        savings_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{bundle_quantities, MemberSelection};
    use crate::catalog::Product;
    use rust_decimal_macros::dec;

    fn product(sku: &str, unit_price: Decimal, content: Decimal, unit: &str) -> Product {
        Product::new(
            sku,
            sku,
            sku.to_lowercase(),
            Money::new(unit_price, Currency::EUR),
            content,
            unit,
        )
    }

    fn priced(selection: &BundleSelection) -> BundlePricing {
        let quantities = bundle_quantities(selection).unwrap();
        bundle_prices(&quantities, selection).unwrap()
    }

    #[test]
    fn test_floor_charged_for_actual_area() {
        // 19.5 m² wanted, 9 packages of 2.22 m² bought: pay for 19.98 m².
        let selection =
            BundleSelection::new(product("LAM-01", dec!(12.50), dec!(2.22), "m\u{b2}"), dec!(19.5));
        let pricing = priced(&selection);

        assert_eq!(pricing.lines[0].amount, dec!(19.98));
        assert_eq!(pricing.bundle_total.amount, dec!(249.75));
    }

    #[test]
    fn test_standard_inclusion_is_free_but_counted_in_comparison() {
        let insulation = product("INS-01", dec!(2.95), dec!(5), "m\u{b2}");
        let selection =
            BundleSelection::new(product("LAM-01", dec!(10.00), dec!(2.5), "m\u{b2}"), dec!(20))
                .with_insulation(MemberSelection::standard(insulation));
        let pricing = priced(&selection);

        // Floor: 8 packages, 20 m² at 10 €/m² = 200 €.
        // Insulation: free in the bundle, 4 packages, 20 m² at 2.95 € in
        // the comparison = 59 €.
        assert_eq!(pricing.bundle_total.amount, dec!(200.00));
        assert_eq!(pricing.comparison_total.amount, dec!(259.00));
        assert_eq!(pricing.savings_amount.amount, dec!(59.00));
        assert!(pricing.has_savings());

        let line = &pricing.lines[1];
        assert!(line.unit_price.is_zero());
        assert_eq!(line.regular_unit_price.amount, dec!(2.95));
    }

    #[test]
    fn test_upgrade_pays_its_own_rate() {
        let upgrade = product("INS-02", dec!(4.50), dec!(5), "m\u{b2}");
        let selection =
            BundleSelection::new(product("LAM-01", dec!(10.00), dec!(2.5), "m\u{b2}"), dec!(20))
                .with_insulation(MemberSelection::upgrade(upgrade));
        let pricing = priced(&selection);

        // Upgrade: 20 m² at 4.50 €/m² = 90 € on top of the 200 € floor.
        assert_eq!(pricing.bundle_total.amount, dec!(290.00));
        assert_eq!(pricing.lines[1].total.amount, dec!(90.00));
    }

    #[test]
    fn test_zero_priced_upgrade_is_not_treated_as_standard() {
        // A coincidentally free product selected as an upgrade stays an
        // upgrade line; inclusion is explicit, not price-inferred.
        let free = product("INS-03", dec!(0), dec!(5), "m\u{b2}");
        let selection =
            BundleSelection::new(product("LAM-01", dec!(10.00), dec!(2.5), "m\u{b2}"), dec!(20))
                .with_insulation(MemberSelection::upgrade(free));
        let pricing = priced(&selection);

        let line = &pricing.lines[1];
        assert_eq!(line.role, BundleRole::Insulation);
        assert!(line.total.is_zero());
        assert!(line.comparison_total.is_zero());
    }

    #[test]
    fn test_sale_package_price_overrides_unit_pricing() {
        let mut floor = product("LAM-02", dec!(12.50), dec!(2.22), "m\u{b2}");
        floor.sale_package_price = Some(Money::new(dec!(24.99), Currency::EUR));
        let selection = BundleSelection::new(floor, dec!(19.5));
        let pricing = priced(&selection);

        // 9 packages at the package-level sale price.
        assert_eq!(pricing.bundle_total.amount, dec!(224.91));
        // Comparison stays per-unit at the regular rate over 19.98 m².
        assert_eq!(pricing.comparison_total.amount, dec!(249.75));
    }

    #[test]
    fn test_savings_percent_guarded_against_zero_comparison() {
        let selection =
            BundleSelection::new(product("LAM-01", dec!(10.00), dec!(2.5), "m\u{b2}"), Decimal::ZERO);
        let pricing = priced(&selection);

        assert!(pricing.comparison_total.is_zero());
        assert_eq!(pricing.savings_percent, Decimal::ZERO);
    }

    #[test]
    fn test_savings_bounds() {
        let mut floor = product("LAM-01", dec!(9.99), dec!(2.22), "m\u{b2}");
        floor.regular_unit_price = Money::new(dec!(12.50), Currency::EUR);
        let selection = BundleSelection::new(floor, dec!(20))
            .with_baseboard(MemberSelection::standard(product(
                "SKI-01",
                dec!(3.49),
                dec!(2.4),
                "lfm",
            )));
        let pricing = priced(&selection);

        assert!(!pricing.savings_amount.is_negative());
        assert!(pricing.savings_percent >= Decimal::ZERO);
        assert!(pricing.savings_percent <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_currency_mismatch_is_an_error() {
        let insulation = Product::new(
            "INS-01",
            "Underlay",
            "underlay",
            Money::new(dec!(2.95), Currency::USD),
            dec!(5),
            "m\u{b2}",
        );
        let selection =
            BundleSelection::new(product("LAM-01", dec!(10.00), dec!(2.5), "m\u{b2}"), dec!(20))
                .with_insulation(MemberSelection::upgrade(insulation));
        let quantities = bundle_quantities(&selection).unwrap();

        assert!(matches!(
            bundle_prices(&quantities, &selection),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_intermediate_precision_is_kept() {
        // Three thirds of a cent only add up correctly at full precision.
        let floor = product("LAM-01", dec!(0.333333), dec!(1), "m\u{b2}");
        let selection = BundleSelection::new(floor, dec!(3));
        let pricing = priced(&selection);

        assert_eq!(pricing.bundle_total.amount, dec!(0.999999));
        assert_eq!(pricing.rounded().bundle_total.amount, dec!(1.00));
    }
}
