//! Tax table error types.

use fintrack_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building a bracket table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    /// The table has no brackets.
    #[error("Tax bracket table is empty")]
    EmptyTable,

    /// The lowest bracket does not start at zero.
    #[error("First tax bracket must start at 0, starts at {min}")]
    FirstBracketNotZero {
        /// Lower bound found on the first bracket.
        min: Decimal,
    },

    /// A bracket does not start where the previous one ended.
    #[error("Tax bracket {index} starts at {found}, expected {expected}")]
    NotContiguous {
        /// Position of the offending bracket.
        index: usize,
        /// Upper bound of the previous bracket.
        expected: Decimal,
        /// Lower bound of this bracket.
        found: Decimal,
    },

    /// A bracket's upper bound is not above its lower bound.
    #[error("Tax bracket {index} has max {max} not above min {min}")]
    EmptyBracket {
        /// Position of the offending bracket.
        index: usize,
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// A rate lies outside `[0, 1]`.
    #[error("Tax bracket {index} has rate {rate} outside 0..=1")]
    RateOutOfRange {
        /// Position of the offending bracket.
        index: usize,
        /// The configured rate.
        rate: Decimal,
    },

    /// An unbounded bracket appears before the end of the table.
    #[error("Only the last tax bracket may be unbounded, bracket {index} is unbounded")]
    UnboundedNotLast {
        /// Position of the offending bracket.
        index: usize,
    },

    /// The top bracket has an upper bound, leaving income above it untaxed.
    #[error("Last tax bracket must be unbounded")]
    BoundedTopBracket,
}

impl TaxError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTable => "EMPTY_TAX_TABLE",
            Self::FirstBracketNotZero { .. } => "FIRST_BRACKET_NOT_ZERO",
            Self::NotContiguous { .. } => "BRACKETS_NOT_CONTIGUOUS",
            Self::EmptyBracket { .. } => "EMPTY_BRACKET",
            Self::RateOutOfRange { .. } => "RATE_OUT_OF_RANGE",
            Self::UnboundedNotLast { .. } => "UNBOUNDED_NOT_LAST",
            Self::BoundedTopBracket => "BOUNDED_TOP_BRACKET",
        }
    }
}

impl From<TaxError> for AppError {
    fn from(err: TaxError) -> Self {
        Self::Configuration(err.to_string())
    }
}
