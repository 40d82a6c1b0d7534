//! Yearly projection of expenses.

use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::types::ExpenseRecord;

/// Projects expense records onto a yearly total.
pub struct ExpenseProjector;

impl ExpenseProjector {
    /// Total yearly expense for the records, summed in input order.
    ///
    /// One-off expenses count once, recurring ones are multiplied by their
    /// yearly frequency (1 when the frequency is unset). Nothing is rounded.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Overflow` when the total does not fit a `Decimal`.
    pub fn project_yearly(records: &[ExpenseRecord]) -> Result<Decimal, ExpenseError> {
        records.iter().try_fold(Decimal::ZERO, |total, record| {
            record
                .yearly_amount()
                .and_then(|amount| total.checked_add(amount))
                .ok_or(ExpenseError::Overflow { field: "amount" })
        })
    }
}

/// Total yearly projected expense for the records.
pub fn project_yearly_expenses(records: &[ExpenseRecord]) -> Result<Decimal, ExpenseError> {
    ExpenseProjector::project_yearly(records)
}
