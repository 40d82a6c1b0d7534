//! Property-based tests for income annualization.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::annualizer::{IncomeAnnualizer, annualize_income};
use super::error::IncomeError;
use super::types::{IncomeTerms, PayFrequency};

/// Strategy to generate a valid positive amount (0.01 to 100,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate hours per week from 0.1 to 80.0.
fn positive_hours() -> impl Strategy<Value = Decimal> {
    (1i64..=800i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Strategy to generate an optional pay frequency.
fn pay_frequency_strategy() -> impl Strategy<Value = Option<PayFrequency>> {
    prop_oneof![
        Just(Some(PayFrequency::Biweekly)),
        Just(Some(PayFrequency::Semimonthly)),
        Just(None),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Hourly gross is always rate * hours * 52.
    #[test]
    fn prop_hourly_gross(rate in positive_amount(), hours in positive_hours()) {
        let gross = IncomeAnnualizer::yearly_gross(&IncomeTerms::hourly(rate, hours)).unwrap();
        prop_assert_eq!(gross, rate * hours * Decimal::from(52));
    }

    /// Salary gross uses 26 periods for biweekly and 24 otherwise.
    #[test]
    fn prop_salary_periods(amount in positive_amount(), frequency in pay_frequency_strategy()) {
        let gross = IncomeAnnualizer::yearly_gross(&IncomeTerms::salary(amount, frequency)).unwrap();
        let periods = if frequency == Some(PayFrequency::Biweekly) { 26 } else { 24 };
        prop_assert_eq!(gross, amount * Decimal::from(periods));
    }

    /// Net never exceeds gross and stays positive.
    #[test]
    fn prop_net_between_zero_and_gross(amount in positive_amount(), frequency in pay_frequency_strategy()) {
        let result = annualize_income(&IncomeTerms::salary(amount, frequency)).unwrap();
        prop_assert!(result.yearly_net <= result.yearly_gross);
        prop_assert!(result.yearly_net > Decimal::ZERO);
    }

    /// Annualizing twice yields identical results.
    #[test]
    fn prop_annualize_idempotent(rate in positive_amount(), hours in positive_hours()) {
        let terms = IncomeTerms::hourly(rate, hours);
        prop_assert_eq!(annualize_income(&terms), annualize_income(&terms));
    }

    /// Non-positive hours are always rejected, never coerced.
    #[test]
    fn prop_non_positive_hours_rejected(rate in positive_amount(), tenths in 0i64..1_000i64) {
        let hours = Decimal::new(-tenths, 1);
        let result = annualize_income(&IncomeTerms::hourly(rate, hours));
        prop_assert_eq!(result, Err(IncomeError::NonPositiveHoursPerWeek(hours)));
    }
}
