//! Bundle selection types.

use crate::catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an optional bundle member is included.
///
/// This is an explicit variant rather than something inferred from the
/// member's price: a product's own price could coincidentally be zero,
/// which must not make it count as the free standard pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Inclusion {
    /// The product's designated standard pairing, free with the bundle.
    #[default]
    Standard,
    /// A customer-swapped alternative, priced at its own rate.
    Upgrade,
}

impl Inclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Inclusion::Standard => "standard",
            Inclusion::Upgrade => "upgrade",
        }
    }

    /// Whether this member is free as part of the bundle.
    pub fn is_free(&self) -> bool {
        matches!(self, Inclusion::Standard)
    }
}

/// An optional bundle member together with how it was selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberSelection {
    /// The selected product.
    pub product: Product,
    /// Standard inclusion or customer upgrade.
    pub inclusion: Inclusion,
}

impl MemberSelection {
    pub fn standard(product: Product) -> Self {
        Self {
            product,
            inclusion: Inclusion::Standard,
        }
    }

    pub fn upgrade(product: Product) -> Self {
        Self {
            product,
            inclusion: Inclusion::Upgrade,
        }
    }
}

/// A per-request snapshot of what the customer is configuring.
///
/// Constructed fresh for every calculation; nothing here is retained
/// or mutated across invocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleSelection {
    /// The floor product, always present.
    pub floor: Product,
    /// Optional insulation underlay.
    pub insulation: Option<MemberSelection>,
    /// Optional baseboard trim.
    pub baseboard: Option<MemberSelection>,
    /// Customer-entered desired floor area.
    pub target_area: Decimal,
    /// Explicit insulation coverage override; defaults to `target_area`.
    pub custom_insulation_area: Option<Decimal>,
    /// Explicit baseboard length override; defaults to the
    /// perimeter heuristic (see `bundle::quantity`).
    pub custom_baseboard_length: Option<Decimal>,
}

impl BundleSelection {
    /// Create a selection for a floor product and desired area.
    ///
    /// Negative input (a malformed form value) is normalized to zero
    /// rather than propagating into the package math.
    pub fn new(floor: Product, target_area: Decimal) -> Self {
        Self {
            floor,
            insulation: None,
            baseboard: None,
            target_area: target_area.max(Decimal::ZERO),
            custom_insulation_area: None,
            custom_baseboard_length: None,
        }
    }

    /// Add an insulation member.
    pub fn with_insulation(mut self, member: MemberSelection) -> Self {
        self.insulation = Some(member);
        self
    }

    /// Add a baseboard member.
    pub fn with_baseboard(mut self, member: MemberSelection) -> Self {
        self.baseboard = Some(member);
        self
    }

    /// Override the insulation coverage area.
    pub fn with_insulation_area(mut self, area: Decimal) -> Self {
        self.custom_insulation_area = Some(area.max(Decimal::ZERO));
        self
    }

    /// Override the baseboard length.
    pub fn with_baseboard_length(mut self, length: Decimal) -> Self {
        self.custom_baseboard_length = Some(length.max(Decimal::ZERO));
        self
    }
}
