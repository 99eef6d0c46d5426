//! Commerce error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in pricing and quantity calculations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Package content must be strictly positive; a zero or negative
    /// value is a misconfigured product, not a user input error.
    #[error("Invalid package content: {0} (must be > 0)")]
    InvalidPackageContent(Decimal),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
