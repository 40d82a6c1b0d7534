//! Budget summary over the current income and expense records.

pub mod error;
pub mod summarizer;
pub mod types;


pub use error::BudgetError;
pub use summarizer::{BudgetSummarizer, summarize_budget};
pub use types::{BudgetSummary, MONTHS_PER_YEAR};
