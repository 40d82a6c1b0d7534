//! Expense projection and statistics.

pub mod error;
pub mod projector;
pub mod stats;
pub mod types;
pub mod validation;

#[cfg(test)]
mod projector_props;

pub use error::ExpenseError;
pub use projector::{ExpenseProjector, project_yearly_expenses};
pub use types::{ExpenseCategory, ExpenseRecord, ExpenseStats, RecurringFrequency};
pub use validation::validate_expense;
