//! Write-path bounds for income records.

use rust_decimal::Decimal;

use super::error::IncomeError;
use super::types::{IncomeDraft, IncomeType, IncomeUpdate};

/// Smallest accepted income amount.
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Largest accepted income amount.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);
/// Smallest accepted hours per week.
pub const MIN_HOURS_PER_WEEK: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
/// Largest accepted hours per week.
pub const MAX_HOURS_PER_WEEK: Decimal = Decimal::from_parts(168, 0, 0, false, 0);
/// Longest accepted description, in characters after trimming.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Checks a new income source before it is annualized.
///
/// Salary income requires a pay frequency and hourly income requires hours
/// per week on creation.
pub fn validate_draft(draft: &IncomeDraft) -> Result<(), IncomeError> {
    validate_amount(draft.terms.amount)?;
    validate_description(&draft.description)?;
    if let Some(hours) = draft.terms.hours_per_week {
        validate_hours(hours)?;
    }

    match draft.terms.income_type {
        IncomeType::Salary if draft.terms.pay_frequency.is_none() => Err(IncomeError::validation(
            "payFrequency",
            "pay frequency is required for salary income",
        )),
        IncomeType::Hourly if draft.terms.hours_per_week.is_none() => {
            Err(IncomeError::MissingHoursPerWeek)
        }
        _ => Ok(()),
    }
}

/// Checks only the fields an update supplies.
pub fn validate_update(update: &IncomeUpdate) -> Result<(), IncomeError> {
    if let Some(amount) = update.amount {
        validate_amount(amount)?;
    }
    if let Some(description) = update.description.as_deref() {
        validate_description(description)?;
    }
    if let Some(hours) = update.hours_per_week {
        validate_hours(hours)?;
    }
    Ok(())
}

fn validate_amount(amount: Decimal) -> Result<(), IncomeError> {
    if amount < MIN_AMOUNT || amount > MAX_AMOUNT {
        return Err(IncomeError::validation(
            "amount",
            format!("amount must be between {MIN_AMOUNT} and {MAX_AMOUNT}, got {amount}"),
        ));
    }
    Ok(())
}

fn validate_hours(hours: Decimal) -> Result<(), IncomeError> {
    if hours < MIN_HOURS_PER_WEEK || hours > MAX_HOURS_PER_WEEK {
        return Err(IncomeError::validation(
            "hoursPerWeek",
            format!(
                "hours per week must be between {MIN_HOURS_PER_WEEK} and {MAX_HOURS_PER_WEEK}, got {hours}"
            ),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), IncomeError> {
    let len = description.trim().chars().count();
    if len == 0 || len > MAX_DESCRIPTION_LEN {
        return Err(IncomeError::validation(
            "description",
            format!("description must be between 1 and {MAX_DESCRIPTION_LEN} characters"),
        ));
    }
    Ok(())
}
