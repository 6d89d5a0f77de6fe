//! Exact money amounts in a single currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` values held at the currency's
//! minor-unit precision.

pub mod allocation;
pub mod rounding;
pub mod value;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use rounding::RoundingService;
pub use value::Money;
