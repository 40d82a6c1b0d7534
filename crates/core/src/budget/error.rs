//! Budget error types.

use fintrack_shared::AppError;
use fintrack_shared::types::IncomeId;
use thiserror::Error;

use crate::expense::ExpenseError;
use crate::income::IncomeError;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// An income record could not be annualized.
    #[error("Income {id} is invalid: {source}")]
    Income {
        /// The offending record.
        id: IncomeId,
        /// Why it was rejected.
        source: IncomeError,
    },

    /// The expense records could not be projected.
    #[error("Expenses could not be projected: {0}")]
    Expense(#[from] ExpenseError),

    /// A derived summary figure does not fit the decimal range.
    #[error("{field} is out of range")]
    Overflow {
        /// Summary field that overflowed.
        field: &'static str,
    },
}

impl BudgetError {
    /// The wire name of the field that caused the error.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Income { source, .. } => source.field(),
            Self::Expense(source) => source.field(),
            Self::Overflow { field } => field,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Income { source, .. } => source.error_code(),
            Self::Expense(source) => source.error_code(),
            Self::Overflow { .. } => "ARITHMETIC_OVERFLOW",
        }
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::Validation(err.to_string())
    }
}
