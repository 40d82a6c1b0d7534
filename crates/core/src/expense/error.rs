//! Expense error types.

use fintrack_shared::AppError;
use thiserror::Error;

/// Expense-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// A field is outside the accepted bounds.
    #[error("{field}: {message}")]
    Validation {
        /// Offending field, as named on the wire.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// A total does not fit the decimal range.
    #[error("{field} is too large to total")]
    Overflow {
        /// Field whose values drove the overflow.
        field: &'static str,
    },

    /// The reference month does not exist.
    #[error("Invalid reference month: {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}

impl ExpenseError {
    /// Creates a validation error for a field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// The wire name of the field that caused the error.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } | Self::Overflow { field } => field,
            Self::InvalidMonth { .. } => "month",
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Overflow { .. } => "ARITHMETIC_OVERFLOW",
            Self::InvalidMonth { .. } => "INVALID_MONTH",
        }
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        Self::Validation(err.to_string())
    }
}
