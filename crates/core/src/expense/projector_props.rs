//! Property-based tests for the yearly expense projection.

use chrono::NaiveDate;
use fintrack_shared::types::ExpenseId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::projector::project_yearly_expenses;
use super::types::{ExpenseCategory, ExpenseRecord, RecurringFrequency};

/// Strategy to generate a valid positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an optional recurring frequency.
fn frequency_strategy() -> impl Strategy<Value = Option<RecurringFrequency>> {
    prop_oneof![
        Just(Some(RecurringFrequency::Daily)),
        Just(Some(RecurringFrequency::Weekly)),
        Just(Some(RecurringFrequency::Biweekly)),
        Just(Some(RecurringFrequency::Monthly)),
        Just(Some(RecurringFrequency::Yearly)),
        Just(None),
    ]
}

/// Strategy to generate an expense record.
fn expense_strategy() -> impl Strategy<Value = ExpenseRecord> {
    (positive_amount(), any::<bool>(), frequency_strategy()).prop_map(
        |(amount, is_recurring, recurring_frequency)| ExpenseRecord {
            id: ExpenseId::new(),
            amount,
            description: "generated".to_string(),
            category: ExpenseCategory::Other,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            is_recurring,
            recurring_frequency,
        },
    )
}

/// Strategy to generate a list of records together with a shuffled copy.
fn records_and_permutation() -> impl Strategy<Value = (Vec<ExpenseRecord>, Vec<ExpenseRecord>)> {
    prop::collection::vec(expense_strategy(), 0..30)
        .prop_flat_map(|records| (Just(records.clone()), Just(records).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reordering the records never changes the projection.
    #[test]
    fn prop_projection_permutation_invariant((records, shuffled) in records_and_permutation()) {
        prop_assert_eq!(
            project_yearly_expenses(&records).unwrap(),
            project_yearly_expenses(&shuffled).unwrap()
        );
    }

    /// One-off expenses contribute exactly their amount, whatever the frequency says.
    #[test]
    fn prop_one_off_counts_once(amount in positive_amount(), frequency in frequency_strategy()) {
        let record = ExpenseRecord {
            id: ExpenseId::new(),
            amount,
            description: "one-off".to_string(),
            category: ExpenseCategory::Shopping,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            is_recurring: false,
            recurring_frequency: frequency,
        };
        prop_assert_eq!(project_yearly_expenses(&[record]).unwrap(), amount);
    }

    /// The projection of a concatenation is the sum of the projections.
    #[test]
    fn prop_projection_additive(
        left in prop::collection::vec(expense_strategy(), 0..15),
        right in prop::collection::vec(expense_strategy(), 0..15),
    ) {
        let combined: Vec<ExpenseRecord> = left.iter().chain(right.iter()).cloned().collect();
        prop_assert_eq!(
            project_yearly_expenses(&combined).unwrap(),
            project_yearly_expenses(&left).unwrap() + project_yearly_expenses(&right).unwrap()
        );
    }

    /// A projection is never below the raw sum of amounts.
    #[test]
    fn prop_projection_at_least_raw_sum(records in prop::collection::vec(expense_strategy(), 0..30)) {
        let raw: Decimal = records.iter().map(|record| record.amount).sum();
        prop_assert!(project_yearly_expenses(&records).unwrap() >= raw);
    }
}
