//! Income annualization.
//!
//! Converts salary and hourly income into yearly gross and net figures and
//! keeps the stored tax rate in sync on every create and update.

pub mod annualizer;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod annualizer_props;

pub use annualizer::{IncomeAnnualizer, annualize_income};
pub use error::IncomeError;
pub use service::IncomeService;
pub use types::{
    AnnualizedIncome, IncomeDraft, IncomeRecord, IncomeTerms, IncomeType, IncomeUpdate,
    PayFrequency,
};
