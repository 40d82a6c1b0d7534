//! Spending statistics for a reference month.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ExpenseError;
use super::types::{ExpenseCategory, ExpenseRecord, ExpenseStats};

impl ExpenseStats {
    /// Computes statistics over raw amounts for the given calendar month.
    ///
    /// The month is an explicit input so the result never depends on the clock.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` for a month that does not exist and `Overflow`
    /// when a total does not fit a `Decimal`.
    pub fn compute(
        records: &[ExpenseRecord],
        year: i32,
        month: u32,
    ) -> Result<Self, ExpenseError> {
        let days = days_in_month(year, month)?;

        let mut total_expenses = Decimal::ZERO;
        let mut monthly_total = Decimal::ZERO;
        let mut by_category: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();

        let add = |total: Decimal, amount: Decimal| {
            total
                .checked_add(amount)
                .ok_or(ExpenseError::Overflow { field: "amount" })
        };

        for record in records {
            total_expenses = add(total_expenses, record.amount)?;
            let category_total = by_category.entry(record.category).or_default();
            *category_total = add(*category_total, record.amount)?;
            if record.date.year() == year && record.date.month() == month {
                monthly_total = add(monthly_total, record.amount)?;
            }
        }

        let average_daily = (monthly_total / Decimal::from(days))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Ok(Self {
            total_expenses,
            category_breakdown: by_category,
            monthly_total,
            average_daily,
        })
    }
}

fn days_in_month(year: i32, month: u32) -> Result<i64, ExpenseError> {
    let invalid = || ExpenseError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((next - first).num_days())
}
