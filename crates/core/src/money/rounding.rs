//! Banker's rounding and minor-unit conversion.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use tally_shared::{Currency, MoneyError, MoneyResult};

/// Rounding helpers shared by every money operation.
///
/// All rounding uses Banker's Rounding (`MidpointNearestEven`), which:
/// - Rounds 2.5 → 2 (to nearest even)
/// - Rounds 3.5 → 4 (to nearest even)
/// - Rounds 2.745 → 2.74 at 2 decimals
pub struct RoundingService;

impl RoundingService {
    /// Round a decimal value using Banker's Rounding.
    ///
    /// The result never has more than `decimal_places` fractional digits.
    #[must_use]
    pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
    }

    /// Round a decimal value to the minor-unit precision of `currency`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::{Currency, RoundingService};
    ///
    /// assert_eq!(RoundingService::round_to_currency(dec!(2.755), Currency::Eur), dec!(2.76));
    /// assert_eq!(RoundingService::round_to_currency(dec!(2.745), Currency::Eur), dec!(2.74));
    /// ```
    #[must_use]
    pub fn round_to_currency(value: Decimal, currency: Currency) -> Decimal {
        Self::round(value, currency.minor_unit_digits())
    }

    /// Convert a decimal amount into an integer count of minor units.
    ///
    /// The amount is rounded to the currency precision first, so the
    /// conversion is exact for any stored money amount.
    #[must_use]
    pub fn to_minor_units(value: Decimal, currency: Currency) -> i128 {
        let digits = currency.minor_unit_digits();
        let rounded = Self::round(value, digits);
        // round_dp never leaves more than `digits` fractional digits
        let missing_digits = digits.saturating_sub(rounded.scale());
        rounded.mantissa() * 10i128.pow(missing_digits)
    }

    /// Convert an integer count of minor units back into a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the value has no `Decimal`
    /// representation at any scale up to the currency precision.
    pub fn from_minor_units(units: i128, currency: Currency) -> MoneyResult<Decimal> {
        let digits = currency.minor_unit_digits();
        let mut mantissa = units;
        // Amounts near Decimal::MAX only fit with trailing zeros stripped
        for scale in (0..=digits).rev() {
            if let Ok(amount) = Decimal::try_from_i128_with_scale(mantissa, scale) {
                return Ok(amount);
            }
            if mantissa % 10 != 0 {
                break;
            }
            mantissa /= 10;
        }
        Err(MoneyError::Overflow)
    }
}
