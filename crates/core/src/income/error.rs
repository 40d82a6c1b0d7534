//! Income error types.

use fintrack_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when an income record breaks a required-field contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncomeError {
    /// Amount must be greater than zero.
    #[error("amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),

    /// Hourly income has no hours per week.
    #[error("hoursPerWeek is required for hourly income")]
    MissingHoursPerWeek,

    /// Hourly income has zero or negative hours per week.
    #[error("hoursPerWeek must be greater than 0, got {0}")]
    NonPositiveHoursPerWeek(Decimal),

    /// The yearly projection does not fit the decimal range.
    #[error("{field} is too large to annualize")]
    Overflow {
        /// Field whose value drove the overflow.
        field: &'static str,
    },

    /// A field is outside the accepted bounds.
    #[error("{field}: {message}")]
    Validation {
        /// Offending field, as named on the wire.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl IncomeError {
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
            Self::NonPositiveAmount(_) => "amount",
            Self::MissingHoursPerWeek | Self::NonPositiveHoursPerWeek(_) => "hoursPerWeek",
            Self::Overflow { field } | Self::Validation { field, .. } => field,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::MissingHoursPerWeek => "MISSING_HOURS_PER_WEEK",
            Self::NonPositiveHoursPerWeek(_) => "NON_POSITIVE_HOURS_PER_WEEK",
            Self::Overflow { .. } => "ARITHMETIC_OVERFLOW",
            Self::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

impl From<IncomeError> for AppError {
    fn from(err: IncomeError) -> Self {
        Self::Validation(err.to_string())
    }
}
