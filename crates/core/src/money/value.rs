//! The `Money` value type.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::{Currency, MoneyConfig, MoneyError, MoneyResult};
use tracing::debug;

use super::rounding::RoundingService;

/// An exact monetary amount in a single currency.
///
/// The amount is always held at the currency's minor-unit precision
/// (cents for USD, EUR and BRL), rounded half-to-even on the way in.
/// Values are immutable: every operation returns a new `Money`.
///
/// Binary operations require both operands to share a currency and
/// report [`MoneyError::CurrencyMismatch`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Wire shape of `Money`; re-rounded on deserialization.
#[derive(Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: Currency,
}

impl From<MoneyRepr> for Money {
    fn from(repr: MoneyRepr) -> Self {
        Self::new(repr.amount, repr.currency)
    }
}

impl Money {
    /// Creates a new Money instance, rounding `amount` half-to-even to the
    /// currency's minor unit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::{Currency, Money};
    ///
    /// let money = Money::new(dec!(10.005), Currency::Brl);
    /// assert_eq!(money.amount(), dec!(10.00));
    /// assert_eq!(money.scaled_amount(), 1000);
    /// ```
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: RoundingService::round_to_currency(amount, currency),
            currency,
        }
    }

    /// Creates Money from an integer count of minor units (e.g. cents).
    #[must_use]
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(units, currency.minor_unit_digits()),
            currency,
        }
    }

    /// Creates an amount in US dollars.
    #[must_use]
    pub fn dollars(amount: Decimal) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Creates an amount in euros.
    #[must_use]
    pub fn euros(amount: Decimal) -> Self {
        Self::new(amount, Currency::Eur)
    }

    /// Creates an amount in Brazilian reais.
    #[must_use]
    pub fn brasilian_real(amount: Decimal) -> Self {
        Self::new(amount, Currency::Brl)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Creates a zero amount in the configured default currency.
    #[must_use]
    pub fn zero_default(config: &MoneyConfig) -> Self {
        Self::zero(config.default_currency)
    }

    /// Returns the exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount in minor units (e.g. 10.50 EUR → 1050).
    #[must_use]
    pub fn scaled_amount(&self) -> i128 {
        RoundingService::to_minor_units(self.amount, self.currency)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns the same amount with the opposite sign.
    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ, `Overflow` if the sum
    /// exceeds the decimal range.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "add")?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    /// Subtracts `other` from this amount.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ, `Overflow` if the
    /// difference exceeds the decimal range.
    pub fn subtract(self, other: Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "subtract")?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    /// Multiplies by a decimal factor, rounding the product half-to-even
    /// to the currency's minor unit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::Money;
    ///
    /// let one_euro = Money::euros(dec!(1));
    /// assert_eq!(one_euro.multiply(dec!(2.756)).unwrap(), Money::euros(dec!(2.76)));
    /// assert_eq!(one_euro.multiply(dec!(2.754)).unwrap(), Money::euros(dec!(2.75)));
    /// ```
    ///
    /// # Errors
    ///
    /// `Overflow` if the product exceeds the decimal range.
    pub fn multiply(self, factor: Decimal) -> MoneyResult<Self> {
        let product = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(product, self.currency))
    }

    /// Compares two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn compare(self, other: Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other, "compare")?;
        Ok(self.scaled_amount().cmp(&other.scaled_amount()))
    }

    /// Returns true if this amount is strictly greater than `other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn greater_than(self, other: Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if this amount is strictly less than `other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn less_than(self, other: Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Sums amounts that must all be in `currency`.
    ///
    /// An empty iterator yields zero.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` on the first amount in another currency,
    /// `Overflow` if the running total exceeds the decimal range.
    pub fn try_sum<I>(amounts: I, currency: Currency) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(currency), Self::add)
    }

    fn ensure_same_currency(self, other: Self, operation: &'static str) -> MoneyResult<()> {
        if self.currency == other.currency {
            return Ok(());
        }
        debug!(
            operation,
            left = %self.currency,
            right = %other.currency,
            "rejected money operation across currencies"
        );
        Err(MoneyError::CurrencyMismatch {
            left: self.currency,
            right: other.currency,
        })
    }
}

/// Ordering is only defined within a currency; amounts in different
/// currencies are incomparable.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other).ok()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.currency.minor_unit_digits() as usize;
        write!(f, "{:.*} {}", digits, self.amount, self.currency)
    }
}
