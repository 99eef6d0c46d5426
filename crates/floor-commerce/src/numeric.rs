//! Shared numeric helpers for quantity and price calculations.
//!
//! Historically the storefront bundle calculator and the product-entry
//! price widget each carried their own multiply/round code with
//! different rounding discipline. Both paths now route through this
//! module: ceiling packaging for quantities, exact decimal
//! multiplication and half-up rounding for prices, and locale-tolerant
//! price parsing for raw field input.

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Smallest number of whole packages covering `amount`.
///
/// Returns the smallest integer `n` such that `n * package_content >= amount`.
/// An amount of zero needs zero packages, not one. Negative amounts are
/// treated as zero rather than producing a negative package count.
///
/// # Errors
/// `InvalidPackageContent` if `package_content <= 0`; this is a product
/// data problem and must never turn into a division by zero.
pub fn packages_needed(amount: Decimal, package_content: Decimal) -> Result<u32, CommerceError> {
    if package_content <= Decimal::ZERO {
        return Err(CommerceError::InvalidPackageContent(package_content));
    }
    if amount <= Decimal::ZERO {
        return Ok(0);
    }
    let packages = (amount / package_content).ceil();
    // Package counts in this domain are tiny; a saturating cast is fine.
    Ok(packages.to_u32().unwrap_or(u32::MAX))
}

/// Convert an `f64` to its shortest decimal representation.
///
/// Non-finite values (NaN, infinities) become zero so they can never
/// leak into downstream arithmetic.
pub fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    // The shortest round-trip string ("0.1", not "0.1000000000000000055...")
    // carries exactly the decimal places the operator typed.
    let repr = value.to_string();
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .unwrap_or(Decimal::ZERO)
}

/// Multiply two raw numeric field values without floating-point drift.
///
/// A zero or non-finite operand short-circuits to zero. Otherwise both
/// operands are taken at their decimal face value and multiplied
/// exactly, so `0.1 * 3` is `0.3`, never `0.30000000000000004`.
pub fn precise_multiply(a: f64, b: f64) -> Decimal {
    if a == 0.0 || b == 0.0 || !a.is_finite() || !b.is_finite() {
        return Decimal::ZERO;
    }
    decimal_from_f64(a) * decimal_from_f64(b)
}

/// Round half up at `decimals` places.
pub fn precise_round(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a raw price field into a decimal value.
///
/// Accepts either `.` or `,` as the decimal separator (German operators
/// type commas), ignores currency symbols and other stray characters,
/// and parses the leading numeric portion of what remains. Empty or
/// unparseable input yields zero; `NaN` can never escape this function.
pub fn parse_price(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',' || *c == '-')
        .collect::<String>()
        .replace(',', ".");

    // Longest valid numeric prefix: optional sign, digits, one dot, digits.
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '-' if i == 0 => end = i + 1,
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    let number = cleaned[..end].trim_end_matches('.');
    let number = if let Some(frac) = number.strip_prefix('.') {
        format!("0.{frac}")
    } else if let Some(frac) = number.strip_prefix("-.") {
        format!("-0.{frac}")
    } else {
        number.to_string()
    };
    Decimal::from_str(&number).unwrap_or(Decimal::ZERO)
}
