//! Write-path bounds for expense records.

use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::types::ExpenseRecord;

/// Smallest accepted expense amount.
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Largest accepted expense amount.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Longest accepted description, in characters after trimming.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Checks an expense before it is stored.
pub fn validate_expense(record: &ExpenseRecord) -> Result<(), ExpenseError> {
    if record.amount < MIN_AMOUNT || record.amount > MAX_AMOUNT {
        return Err(ExpenseError::validation(
            "amount",
            format!(
                "amount must be between {MIN_AMOUNT} and {MAX_AMOUNT}, got {}",
                record.amount
            ),
        ));
    }

    let len = record.description.trim().chars().count();
    if len == 0 || len > MAX_DESCRIPTION_LEN {
        return Err(ExpenseError::validation(
            "description",
            format!("description must be between 1 and {MAX_DESCRIPTION_LEN} characters"),
        ));
    }

    Ok(())
}
