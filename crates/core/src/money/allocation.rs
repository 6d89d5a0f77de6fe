//! Amount allocation using the Largest Remainder Method.
//!
//! Allocation splits an amount into parts by integer ratios while
//! guaranteeing the parts sum exactly to the original amount (no cents
//! lost or gained). The classic failure it avoids is Foemmel's conundrum:
//! naively rounding 0.05 split 3:7 gives 0.02 + 0.04 = 0.06.
//!
//! The Largest Remainder Method works by:
//! 1. Calculate exact shares in minor units
//! 2. Round each share down
//! 3. Calculate the remainder (total - sum of rounded)
//! 4. Distribute remainder units to parts with the largest fractional
//!    parts, earlier parts winning ties

use tally_shared::{MoneyError, MoneyResult};
use tracing::debug;

use super::rounding::RoundingService;
use super::value::Money;

/// Allocation utility for distributing integer minor units.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `total` minor units by `ratios` using the Largest Remainder
    /// Method.
    ///
    /// Shares are computed with integer arithmetic only: the fractional
    /// part of share `i` is `total * ratios[i] mod ratio_sum`, and all
    /// fractional parts share the denominator `ratio_sum`, so comparing
    /// them is exact.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::AllocationUtil;
    ///
    /// // 5 cents split 3:7 = ideal [1.5, 3.5] → [2, 3]
    /// let parts = AllocationUtil::allocate_minor_units(5, &[3, 7]).unwrap();
    /// assert_eq!(parts, vec![2, 3]);
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` if `ratios` is empty, contains a zero, or
    /// `total` is negative. `Overflow` if `total * ratio` exceeds `i128`.
    pub fn allocate_minor_units(total: i128, ratios: &[u32]) -> MoneyResult<Vec<i128>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAllocation(
                "at least one ratio is required".to_string(),
            ));
        }
        if let Some(index) = ratios.iter().position(|ratio| *ratio == 0) {
            return Err(MoneyError::InvalidAllocation(format!(
                "ratio at index {index} must be positive"
            )));
        }
        if total < 0 {
            return Err(MoneyError::InvalidAllocation(format!(
                "cannot allocate negative total of {total} minor units"
            )));
        }

        let ratio_sum: i128 = ratios.iter().map(|ratio| i128::from(*ratio)).sum();
        if ratio_sum == 0 {
            return Err(MoneyError::InvalidAllocation(
                "ratios sum to zero".to_string(),
            ));
        }

        // Floor of each exact share, plus its fractional numerator
        let mut parts = Vec::with_capacity(ratios.len());
        let mut fractions = Vec::with_capacity(ratios.len());
        for (index, ratio) in ratios.iter().enumerate() {
            let numerator = total
                .checked_mul(i128::from(*ratio))
                .ok_or(MoneyError::Overflow)?;
            parts.push(numerator / ratio_sum);
            fractions.push((index, numerator % ratio_sum));
        }

        let allocated: i128 = parts.iter().sum();
        // Each floor loses less than one unit, so this is below ratios.len()
        let leftover = usize::try_from(total - allocated).map_err(|_| MoneyError::Overflow)?;

        if leftover > 0 {
            // Stable sort: equal fractions keep ratio order
            fractions.sort_by(|a, b| b.1.cmp(&a.1));
            for (index, _) in fractions.iter().take(leftover) {
                parts[*index] += 1;
            }
        }

        debug!(
            total = %total,
            parts = ratios.len(),
            leftover,
            "allocated minor units by ratios"
        );

        Ok(parts)
    }
}

impl Money {
    /// Split this amount into parts proportional to `ratios`.
    ///
    /// Every part is in this amount's currency, parts are returned in
    /// ratio order, and they sum exactly to this amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::Money;
    ///
    /// let parts = Money::euros(dec!(10)).allocate(&[1, 1, 1]).unwrap();
    /// assert_eq!(
    ///     parts,
    ///     vec![Money::euros(dec!(3.34)), Money::euros(dec!(3.33)), Money::euros(dec!(3.33))]
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` if `ratios` is empty or contains a zero, or if
    /// this amount is negative. `Overflow` only if a share of an amount
    /// near `Decimal::MAX` has cents that no `Decimal` can hold.
    pub fn allocate(&self, ratios: &[u32]) -> MoneyResult<Vec<Self>> {
        let currency = self.currency();
        AllocationUtil::allocate_minor_units(self.scaled_amount(), ratios)?
            .into_iter()
            .map(|units| {
                RoundingService::from_minor_units(units, currency)
                    .map(|amount| Self::new(amount, currency))
            })
            .collect()
    }

    /// Split this amount into `parts` equal shares; earlier shares receive
    /// the leftover minor units.
    ///
    /// # Errors
    ///
    /// `InvalidAllocation` if `parts` is zero or this amount is negative.
    pub fn allocate_evenly(&self, parts: usize) -> MoneyResult<Vec<Self>> {
        if parts == 0 {
            return Err(MoneyError::InvalidAllocation(
                "at least one part is required".to_string(),
            ));
        }
        self.allocate(&vec![1; parts])
    }
}
