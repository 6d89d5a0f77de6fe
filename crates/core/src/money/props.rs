//! Property-based tests for money operations.
//!
//! - Exactness of construction and repeated add/subtract cycles
//! - Currency safety of binary operations
//! - Additive identity and inverse
//! - Allocation conservation, ordering and fairness

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyError};

use super::allocation::AllocationUtil;
use super::rounding::RoundingService;
use super::value::Money;

/// Strategy to generate a supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Usd), Just(Currency::Eur), Just(Currency::Brl)]
}

/// Strategy to generate two different currencies.
fn distinct_currencies() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to generate signed cent amounts (-1,000,000.00 to 1,000,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-negative cent amounts (0.00 to 1,000,000.00).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with sub-cent digits (up to 6 decimals).
fn unrounded_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|micros| Decimal::new(micros, 6))
}

/// Strategy to generate allocation ratios (1 to 20 parts, each 1 to 1000).
fn ratios() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..1000, 1..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Exactness
    // =========================================================================

    /// The stored amount equals the input rounded half-to-even to the minor unit.
    #[test]
    fn prop_construction_rounds_half_even(
        amount in unrounded_amount(),
        currency in currency(),
    ) {
        let digits = currency.minor_unit_digits();
        let money = Money::new(amount, currency);
        prop_assert_eq!(money.amount(), RoundingService::round(amount, digits));
        prop_assert_eq!(
            Decimal::from_i128_with_scale(money.scaled_amount(), digits),
            money.amount()
        );
    }

    /// Repeated add/subtract cycles never drift.
    #[test]
    fn prop_add_subtract_cycles_do_not_drift(
        start in signed_amount(),
        step in signed_amount(),
        cycles in 1usize..50,
        currency in currency(),
    ) {
        let original = Money::new(start, currency);
        let step = Money::new(step, currency);

        let mut running = original;
        for _ in 0..cycles {
            running = running.add(step).unwrap();
        }
        for _ in 0..cycles {
            running = running.subtract(step).unwrap();
        }
        prop_assert_eq!(running, original);
    }

    // =========================================================================
    // Currency safety
    // =========================================================================

    /// Every binary operation fails across currencies.
    #[test]
    fn prop_binary_operations_reject_mismatched_currencies(
        a in signed_amount(),
        b in signed_amount(),
        (left, right) in distinct_currencies(),
    ) {
        let a = Money::new(a, left);
        let b = Money::new(b, right);
        let expected = MoneyError::CurrencyMismatch { left, right };

        prop_assert_eq!(a.add(b), Err(expected.clone()));
        prop_assert_eq!(a.subtract(b), Err(expected.clone()));
        prop_assert_eq!(a.greater_than(b), Err(expected.clone()));
        prop_assert_eq!(a.less_than(b), Err(expected));
    }

    // =========================================================================
    // Additive identity / inverse
    // =========================================================================

    /// a + (0 - a) == 0
    #[test]
    fn prop_additive_inverse(amount in signed_amount(), currency in currency()) {
        let zero = Money::zero(currency);
        let a = Money::new(amount, currency);
        prop_assert_eq!(a.add(zero.subtract(a).unwrap()).unwrap(), zero);
    }

    /// (a + b) - b == a
    #[test]
    fn prop_subtract_undoes_add(
        a in signed_amount(),
        b in signed_amount(),
        currency in currency(),
    ) {
        let a = Money::new(a, currency);
        let b = Money::new(b, currency);
        prop_assert_eq!(a.add(b).unwrap().subtract(b).unwrap(), a);
    }

    /// Comparison agrees with the scaled amounts.
    #[test]
    fn prop_comparison_matches_scaled_amounts(
        a in signed_amount(),
        b in signed_amount(),
        currency in currency(),
    ) {
        let a = Money::new(a, currency);
        let b = Money::new(b, currency);
        prop_assert_eq!(a.greater_than(b).unwrap(), a.scaled_amount() > b.scaled_amount());
        prop_assert_eq!(a.less_than(b).unwrap(), a.scaled_amount() < b.scaled_amount());
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Parts always sum exactly to the allocated amount.
    #[test]
    fn prop_allocation_conserves_total(
        amount in non_negative_amount(),
        ratios in ratios(),
        currency in currency(),
    ) {
        let money = Money::new(amount, currency);
        let parts = money.allocate(&ratios).unwrap();
        prop_assert_eq!(Money::try_sum(parts, currency).unwrap(), money);
    }

    /// One part per ratio, all in the original currency.
    #[test]
    fn prop_allocation_preserves_length_and_currency(
        amount in non_negative_amount(),
        ratios in ratios(),
        currency in currency(),
    ) {
        let parts = Money::new(amount, currency).allocate(&ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        for part in &parts {
            prop_assert_eq!(part.currency(), currency);
            prop_assert!(!part.is_negative());
        }
    }

    /// Each part is within one minor unit of its exact share, and never
    /// below its floor.
    #[test]
    fn prop_allocation_parts_are_within_one_unit_of_ideal(
        total in 0i128..10_000_000_000i128,
        ratios in ratios(),
    ) {
        let parts = AllocationUtil::allocate_minor_units(total, &ratios).unwrap();
        let ratio_sum: i128 = ratios.iter().map(|r| i128::from(*r)).sum();

        for (part, ratio) in parts.iter().zip(&ratios) {
            let floor = total * i128::from(*ratio) / ratio_sum;
            prop_assert!(
                *part == floor || *part == floor + 1,
                "part {} outside [{}, {}]",
                part, floor, floor + 1
            );
        }
    }

    /// Scaling every ratio by the same factor does not change the result.
    #[test]
    fn prop_allocation_is_ratio_scale_invariant(
        total in 0i128..10_000_000_000i128,
        ratios in ratios(),
        factor in 1u32..50,
    ) {
        let scaled: Vec<u32> = ratios.iter().map(|r| r * factor).collect();
        prop_assert_eq!(
            AllocationUtil::allocate_minor_units(total, &ratios).unwrap(),
            AllocationUtil::allocate_minor_units(total, &scaled).unwrap()
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    // =========================================================================
    // Concrete scenarios
    // =========================================================================

    /// 10 EUR split 1:1:1 = [3.34, 3.33, 3.33].
    #[test]
    fn test_ten_euros_in_thirds() {
        let parts = Money::euros(dec!(10)).allocate(&[1, 1, 1]).unwrap();
        assert_eq!(
            parts,
            vec![
                Money::euros(dec!(3.34)),
                Money::euros(dec!(3.33)),
                Money::euros(dec!(3.33)),
            ]
        );
    }

    /// Foemmel's conundrum: 0.05 EUR split 3:7 = [0.02, 0.03].
    #[test]
    fn test_foemmels_conundrum() {
        let parts = Money::euros(dec!(0.05)).allocate(&[3, 7]).unwrap();
        assert_eq!(parts, vec![Money::euros(dec!(0.02)), Money::euros(dec!(0.03))]);
    }

    /// 10 EUR + 20 EUR = 30 EUR.
    #[test]
    fn test_euros_add_up() {
        let sum = Money::euros(dec!(10)).add(Money::euros(dec!(20))).unwrap();
        assert_eq!(sum, Money::euros(dec!(30)));
    }

    /// 10 EUR + 10 USD fails.
    #[test]
    fn test_euros_plus_dollars_fails() {
        let result = Money::euros(dec!(10)).add(Money::dollars(dec!(10)));
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    /// 1 EUR * 2.756 = 2.76 EUR; 1 EUR * 2.754 = 2.75 EUR.
    #[test]
    fn test_multiply_rounds_at_boundary() {
        let one = Money::euros(dec!(1));
        assert_eq!(one.multiply(dec!(2.756)).unwrap(), Money::euros(dec!(2.76)));
        assert_eq!(one.multiply(dec!(2.754)).unwrap(), Money::euros(dec!(2.75)));
    }

    /// 11 EUR > 10 EUR; 10 EUR > 10 USD fails.
    #[test]
    fn test_greater_than_scenarios() {
        assert!(Money::euros(dec!(11)).greater_than(Money::euros(dec!(10))).unwrap());
        assert!(matches!(
            Money::euros(dec!(10)).greater_than(Money::dollars(dec!(10))),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }
}
