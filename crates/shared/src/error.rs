//! Money error types.

use thiserror::Error;

use crate::currency::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money operations.
///
/// Every operation either succeeds completely or returns one of these
/// without producing a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A binary operation was attempted on amounts in different currencies.
    #[error("Currency mismatch: {left} and {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        left: Currency,
        /// Currency of the right-hand operand.
        right: Currency,
    },

    /// Allocation ratios or total are structurally invalid.
    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),

    /// Decimal arithmetic exceeded the representable range.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Currency code is not one of the supported currencies.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidAllocation(_) => "INVALID_ALLOCATION",
            Self::Overflow => "OVERFLOW",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
