//! Derived price field calculation.

use floor_commerce::numeric::{parse_price, precise_round};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Currency precision for derived entry-side fields.
const PRICE_DECIMALS: u32 = 2;

/// Tracked input fields of the product price form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceField {
    /// Live price per unit of coverage.
    UnitPrice,
    /// Units of coverage per package.
    PackageContent,
    /// Waste/overage percentage.
    WastePercent,
    /// Optional sale price per unit; drives the derived sale package
    /// price and has its own change semantics.
    SaleUnitPrice,
}

impl PriceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::UnitPrice => "unit_price",
            PriceField::PackageContent => "package_content",
            PriceField::WastePercent => "waste_percent",
            PriceField::SaleUnitPrice => "sale_unit_price",
        }
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FieldCalcConfig {
    /// Emit a debug log line per recompute pass.
    pub debug: bool,
}

/// The derived price fields shown next to the operator's input.
///
/// `sale_package_price` is `Option` because an empty sale price must
/// leave the derived field blank; `Some(0)` would render "0.00", which
/// is a different statement than "no sale".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivedPrices {
    /// Package price: unit price × package content.
    pub package_price: Decimal,
    /// Unit price adjusted by the waste percentage, display-only.
    pub unit_price_with_waste: Decimal,
    /// Sale package price, present only while a sale price is set.
    pub sale_package_price: Option<Decimal>,
}

/// Keeps the derived price fields of one product form consistent.
///
/// Owns the last-known raw field values and a snapshot of the initial
/// ones, so multiple calculators mounted at once cannot leak state into
/// each other. Recomputation is pure in the field map: the same inputs
/// always yield the same [`DerivedPrices`].
#[derive(Debug, Clone)]
pub struct PriceFieldCalculator {
    config: FieldCalcConfig,
    /// Last-known raw value per tracked field.
    fields: HashMap<PriceField, String>,
    /// Field values as they were when the form loaded.
    original: HashMap<PriceField, String>,
    derived: DerivedPrices,
}

impl PriceFieldCalculator {
    /// Create a calculator over the form's initial field values and run
    /// the one-time initial recompute pass.
    pub fn new(config: FieldCalcConfig, initial: HashMap<PriceField, String>) -> Self {
        let mut calc = Self {
            config,
            original: initial.clone(),
            fields: initial,
            derived: DerivedPrices::default(),
        };
        calc.recompute("init");
        // The initial pass also derives the sale package price when the
        // form loaded with a sale price already set.
        if !calc.raw(PriceField::SaleUnitPrice).trim().is_empty() {
            calc.derived.sale_package_price = Some(calc.sale_package_price());
        }
        calc
    }

    /// Keystroke-driven update: store the new raw value and recompute
    /// the derived prices.
    pub fn apply_input(&mut self, field: PriceField, raw: impl Into<String>) -> DerivedPrices {
        self.fields.insert(field, raw.into());
        self.recompute(field.as_str());
        // A set sale price tracks content/price edits; a blank one
        // stays blank.
        if self.derived.sale_package_price.is_some() {
            self.derived.sale_package_price = Some(self.sale_package_price());
        }
        self.derived
    }

    /// Sale-price change event. Distinct from [`Self::apply_input`]:
    /// clearing the field blanks the derived sale package price
    /// entirely instead of computing a zero or keeping a stale value.
    pub fn apply_sale_price_change(&mut self, raw: impl Into<String>) -> DerivedPrices {
        let raw = raw.into();
        let cleared = raw.trim().is_empty();
        self.fields.insert(PriceField::SaleUnitPrice, raw);
        if cleared {
            self.derived.sale_package_price = None;
            if self.config.debug {
                debug!(field = "sale_unit_price", "sale price cleared, blanking derived package price");
            }
        } else {
            self.derived.sale_package_price = Some(self.sale_package_price());
        }
        self.derived
    }

    /// The current derived prices.
    pub fn derived(&self) -> DerivedPrices {
        self.derived
    }

    /// Last-known raw value of a field (empty string if never set).
    pub fn raw(&self, field: PriceField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Whether a field differs from its value at form load.
    pub fn is_dirty(&self, field: PriceField) -> bool {
        self.fields.get(&field) != self.original.get(&field)
    }

    fn value(&self, field: PriceField) -> Decimal {
        parse_price(self.raw(field))
    }

    fn sale_package_price(&self) -> Decimal {
        precise_round(
            self.value(PriceField::SaleUnitPrice) * self.value(PriceField::PackageContent),
            PRICE_DECIMALS,
        )
    }

    fn recompute(&mut self, trigger: &str) {
        let unit_price = self.value(PriceField::UnitPrice);
        let content = self.value(PriceField::PackageContent);
        let waste = self.value(PriceField::WastePercent);

        self.derived.package_price = precise_round(unit_price * content, PRICE_DECIMALS);
        let waste_factor = Decimal::ONE + waste / Decimal::ONE_HUNDRED;
        self.derived.unit_price_with_waste =
            precise_round(unit_price * waste_factor, PRICE_DECIMALS);

        if self.config.debug {
            debug!(
                trigger,
                %unit_price,
                %content,
                package_price = %self.derived.package_price,
                unit_price_with_waste = %self.derived.unit_price_with_waste,
                "recomputed derived prices"
            );
        }
    }
}
