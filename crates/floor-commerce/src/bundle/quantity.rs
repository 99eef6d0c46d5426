//! Package quantity calculations for bundle members.
//!
//! Everything here is a pure function of its inputs: a fresh
//! `BundleSelection` goes in, fresh quantity results come out.

use crate::bundle::BundleSelection;
use crate::error::CommerceError;
use crate::numeric::packages_needed;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default baseboard length per m² of floor area.
///
/// For typical room proportions the wall perimeter in running meters is
/// close to the floor area in m², so `length = area * 1.0` is used when
/// the customer gives no explicit length. This is an approximation, not
/// a geometric law; callers can always override via
/// `BundleSelection::with_baseboard_length`.
pub const DEFAULT_BASEBOARD_RATIO: Decimal = Decimal::ONE;

/// Whole-package quantity for one bundle member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PackageQuantity {
    /// What was asked for (area in m² or length in lfm).
    pub required_amount: Decimal,
    /// Coverage per package, copied from the product.
    pub package_content: Decimal,
    /// Whole packages to purchase. Zero only when nothing is required.
    pub packages: u32,
    /// Realized coverage: `packages * package_content`, always
    /// >= `required_amount`.
    pub actual_amount: Decimal,
}

impl PackageQuantity {
    /// Compute the package count for a required amount.
    pub fn compute(
        required_amount: Decimal,
        package_content: Decimal,
    ) -> Result<Self, CommerceError> {
        let required_amount = required_amount.max(Decimal::ZERO);
        let packages = packages_needed(required_amount, package_content)?;
        Ok(Self {
            required_amount,
            package_content,
            packages,
            actual_amount: Decimal::from(packages) * package_content,
        })
    }

    /// Coverage bought beyond what was asked for.
    pub fn overage(&self) -> Decimal {
        self.actual_amount - self.required_amount
    }
}

/// Quantity result for the floor member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FloorQuantity {
    /// The package quantity for the wanted area.
    pub quantity: PackageQuantity,
    /// Waste/overage percentage carried for display and reporting.
    pub waste_percent: Decimal,
}

impl FloorQuantity {
    /// Realized floor coverage in m².
    pub fn actual_area(&self) -> Decimal {
        self.quantity.actual_amount
    }
}

/// Package counts for every selected bundle member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleQuantities {
    pub floor: FloorQuantity,
    pub insulation: Option<PackageQuantity>,
    pub baseboard: Option<PackageQuantity>,
}

/// Compute the floor package count for a wanted area.
///
/// The waste factor is deliberately NOT added to `wanted_area` before
/// packaging: rounding up to whole packages already over-provisions by
/// up to one package, which absorbs typical cutting waste. The factor
/// is carried in the result for display and reporting only. Callers
/// expecting waste to inflate the purchased quantity will be surprised;
/// do not change this policy without product-owner confirmation.
pub fn floor_quantity(
    wanted_area: Decimal,
    waste_percent: Decimal,
    package_content: Decimal,
) -> Result<FloorQuantity, CommerceError> {
    Ok(FloorQuantity {
        quantity: PackageQuantity::compute(wanted_area, package_content)?,
        waste_percent,
    })
}

/// Compute the insulation package count.
///
/// Uses the explicit override when given, otherwise the insulation
/// covers the same area as the floor.
pub fn insulation_quantity(
    area_override: Option<Decimal>,
    floor_area: Decimal,
    package_content: Decimal,
) -> Result<PackageQuantity, CommerceError> {
    let area = area_override.unwrap_or(floor_area);
    PackageQuantity::compute(area, package_content)
}

/// Compute the baseboard package count.
///
/// Uses the explicit length override when given, otherwise derives the
/// default length from the floor area via [`DEFAULT_BASEBOARD_RATIO`].
pub fn baseboard_quantity(
    length_override: Option<Decimal>,
    floor_area: Decimal,
    package_content: Decimal,
) -> Result<PackageQuantity, CommerceError> {
    let length = length_override.unwrap_or(floor_area * DEFAULT_BASEBOARD_RATIO);
    PackageQuantity::compute(length, package_content)
}

/// Compute package counts for every member of a selection.
///
/// Members without a selected product yield `None`; no packaging is
/// computed and no division is attempted for them.
pub fn bundle_quantities(selection: &BundleSelection) -> Result<BundleQuantities, CommerceError> {
    let floor = floor_quantity(
        selection.target_area,
        selection.floor.waste_percent,
        selection.floor.package_content,
    )?;

    let insulation = selection
        .insulation
        .as_ref()
        .map(|member| {
            insulation_quantity(
                selection.custom_insulation_area,
                selection.target_area,
                member.product.package_content,
            )
        })
        .transpose()?;

    let baseboard = selection
        .baseboard
        .as_ref()
        .map(|member| {
            baseboard_quantity(
                selection.custom_baseboard_length,
                selection.target_area,
                member.product.package_content,
            )
        })
        .transpose()?;

    Ok(BundleQuantities {
        floor,
        insulation,
        baseboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MemberSelection;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};
    use rust_decimal_macros::dec;

    fn product(sku: &str, content: Decimal, unit: &str) -> Product {
        Product::new(
            sku,
            sku,
            sku.to_lowercase(),
            Money::new(dec!(10.00), Currency::EUR),
            content,
            unit,
        )
    }

    #[test]
    fn test_floor_packages_round_up() {
        // 19.5 m² wanted at 2.22 m² per package: 9 packages, 19.98 m² laid.
        let floor = floor_quantity(dec!(19.5), dec!(5), dec!(2.22)).unwrap();
        assert_eq!(floor.quantity.packages, 9);
        assert_eq!(floor.actual_area(), dec!(19.98));
        assert!(floor.actual_area() >= dec!(19.5));
    }

    #[test]
    fn test_waste_factor_does_not_inflate_area() {
        // The purchased quantity is independent of the waste factor.
        let wastes = [dec!(0), dec!(5), dec!(10), dec!(25), dec!(100)];
        let baseline = floor_quantity(dec!(20), dec!(0), dec!(2.22)).unwrap();
        for waste in wastes {
            let q = floor_quantity(dec!(20), waste, dec!(2.22)).unwrap();
            assert_eq!(q.quantity.packages, baseline.quantity.packages);
            assert_eq!(q.actual_area(), baseline.actual_area());
            assert_eq!(q.waste_percent, waste);
        }
    }

    #[test]
    fn test_insulation_defaults_to_floor_area() {
        let q = insulation_quantity(None, dec!(20), dec!(10)).unwrap();
        assert_eq!(q.required_amount, dec!(20));
        assert_eq!(q.packages, 2);

        let q = insulation_quantity(Some(dec!(5)), dec!(20), dec!(10)).unwrap();
        assert_eq!(q.required_amount, dec!(5));
        assert_eq!(q.packages, 1);
    }

    #[test]
    fn test_baseboard_default_length_is_floor_area() {
        // 26.7 m² floor, 2.4 lfm per package: target 26.7 lfm,
        // 12 packages, 28.8 lfm bought.
        let q = baseboard_quantity(None, dec!(26.7), dec!(2.4)).unwrap();
        assert_eq!(q.required_amount, dec!(26.7));
        assert_eq!(q.packages, 12);
        assert_eq!(q.actual_amount, dec!(28.8));
    }

    #[test]
    fn test_zero_area_needs_zero_packages() {
        let floor = floor_quantity(Decimal::ZERO, dec!(5), dec!(2.22)).unwrap();
        assert_eq!(floor.quantity.packages, 0);
        assert_eq!(floor.actual_area(), Decimal::ZERO);
    }

    #[test]
    fn test_bundle_quantities_absent_members() {
        let selection = BundleSelection::new(
            product("LAM-01", dec!(2.22), "m\u{b2}"),
            dec!(20),
        );
        let quantities = bundle_quantities(&selection).unwrap();
        assert!(quantities.insulation.is_none());
        assert!(quantities.baseboard.is_none());
    }

    #[test]
    fn test_bundle_quantities_full_set() {
        let selection = BundleSelection::new(
            product("LAM-01", dec!(2.22), "m\u{b2}"),
            dec!(26.7),
        )
        .with_insulation(MemberSelection::standard(product(
            "INS-01",
            dec!(5.5),
            "m\u{b2}",
        )))
        .with_baseboard(MemberSelection::standard(product("SKI-01", dec!(2.4), "lfm")));

        let quantities = bundle_quantities(&selection).unwrap();
        assert_eq!(quantities.floor.quantity.packages, 13); // ceil(26.7 / 2.22)
        assert_eq!(quantities.insulation.unwrap().packages, 5); // ceil(26.7 / 5.5)
        assert_eq!(quantities.baseboard.unwrap().packages, 12); // ceil(26.7 / 2.4)
    }

    #[test]
    fn test_invalid_package_content_is_an_error() {
        let err = floor_quantity(dec!(10), dec!(0), Decimal::ZERO);
        assert!(matches!(
            err,
            Err(CommerceError::InvalidPackageContent(_))
        ));
    }
}
