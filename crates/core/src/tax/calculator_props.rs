//! Property-based tests for the effective tax rate.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::bracket::BracketTable;
use super::calculator::TaxCalculator;

/// Strategy to generate a positive yearly income from 0.01 to 10,000,000.00.
fn positive_income() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative yearly income.
fn non_positive_income() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Zero or negative income always yields a 0 rate and never panics.
    #[test]
    fn prop_non_positive_income_rate_is_zero(income in non_positive_income()) {
        let calculator = TaxCalculator::default();
        prop_assert_eq!(calculator.effective_rate(income), Decimal::ZERO);
        prop_assert_eq!(calculator.total_tax(income), Decimal::ZERO);
    }

    /// The effective rate stays between the lowest and highest bracket rates.
    #[test]
    fn prop_rate_bounded_by_bracket_rates(income in positive_income()) {
        let table = BracketTable::default();
        let lowest = table.brackets()[0].rate * Decimal::ONE_HUNDRED;
        let highest = table.top_rate() * Decimal::ONE_HUNDRED;

        let rate = TaxCalculator::new(table).effective_rate(income);
        prop_assert!(rate >= lowest, "rate {} below {}", rate, lowest);
        prop_assert!(rate <= highest, "rate {} above {}", rate, highest);
    }

    /// More income never lowers the effective rate on a progressive table.
    #[test]
    fn prop_rate_monotonic(a in positive_income(), b in positive_income()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let calculator = TaxCalculator::default();

        prop_assert!(calculator.effective_rate(low) <= calculator.effective_rate(high));
    }

    /// Total tax never exceeds the income itself.
    #[test]
    fn prop_tax_below_income(income in positive_income()) {
        let calculator = TaxCalculator::default();
        prop_assert!(calculator.total_tax(income) < income);
    }

    /// The same input always produces the same rate.
    #[test]
    fn prop_rate_deterministic(income in positive_income()) {
        let calculator = TaxCalculator::default();
        prop_assert_eq!(calculator.effective_rate(income), calculator.effective_rate(income));
    }
}
