//! Flooring product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// A product in the flooring catalog.
///
/// Prices are per unit of coverage (`unit_label`: "m²" for flooring and
/// insulation, "lfm" for baseboard trim, "Stk." for accessories), while
/// products are sold in whole packages covering `package_content` units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Live price per unit. Equals `regular_unit_price` when no
    /// discount is active.
    pub unit_price: Money,
    /// Non-discounted comparison price per unit.
    pub regular_unit_price: Money,
    /// Optional pre-discounted package-level price. When present it
    /// overrides the unit-price-derived package price and lines are
    /// priced per package instead of per unit of coverage.
    pub sale_package_price: Option<Money>,
    /// Units of coverage per package. Must be > 0; quantity math
    /// divides by this.
    pub package_content: Decimal,
    /// Waste/overage percentage, display-only (see bundle::quantity).
    pub waste_percent: Decimal,
    /// Display unit (e.g., "m²", "lfm", "Stk.").
    pub unit_label: String,
    /// Product visibility status.
    pub status: ProductStatus,
    /// Additional metadata as JSON.
    pub metadata: serde_json::Value,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new active product priced per unit of coverage.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        unit_price: Money,
        package_content: Decimal,
        unit_label: impl Into<String>,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            unit_price,
            regular_unit_price: unit_price,
            sale_package_price: None,
            package_content,
            waste_percent: Decimal::ZERO,
            unit_label: unit_label.into(),
            status: ProductStatus::Active,
            metadata: serde_json::Value::Object(serde_json::Map::new()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Check if the live price is below the regular price.
    pub fn is_on_sale(&self) -> bool {
        self.unit_price.amount < self.regular_unit_price.amount
    }

    /// Discount percentage against the regular price, if on sale.
    pub fn discount_percentage(&self) -> Option<Decimal> {
        if !self.is_on_sale() || self.regular_unit_price.is_zero() {
            return None;
        }
        let savings = self.regular_unit_price.amount - self.unit_price.amount;
        Some(savings / self.regular_unit_price.amount * Decimal::ONE_HUNDRED)
    }

    /// Package price derived from the unit price (unit price × content).
    pub fn package_price(&self) -> Money {
        self.unit_price.multiply(self.package_content)
    }

    /// Validate the pricing and packaging fields.
    ///
    /// # Errors
    /// - `InvalidPackageContent` when `package_content <= 0`.
    /// - `ValidationError` when the live price exceeds the regular
    ///   price (savings math assumes sale <= regular) or when prices
    ///   carry mixed currencies.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.package_content <= Decimal::ZERO {
            return Err(CommerceError::InvalidPackageContent(self.package_content));
        }
        if self.unit_price.currency != self.regular_unit_price.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.regular_unit_price.currency.code().to_string(),
                got: self.unit_price.currency.code().to_string(),
            });
        }
        if self.unit_price.amount > self.regular_unit_price.amount {
            return Err(CommerceError::ValidationError(format!(
                "unit price {} exceeds regular price {} for {}",
                self.unit_price, self.regular_unit_price, self.sku
            )));
        }
        Ok(())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
