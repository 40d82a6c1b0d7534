//! Core business logic for Fintrack.
//!
//! This crate contains pure calculation logic with ZERO I/O dependencies.
//! All domain types, validation rules, and projections live here.
//!
//! # Modules
//!
//! - `tax` - Progressive bracket tables and effective tax rates
//! - `income` - Income annualization and the tax-rate write path
//! - `expense` - Yearly expense projection and monthly statistics
//! - `budget` - Budget summary over incomes and expenses
//! - `engine` - Facade sharing one tax table across all calculations

pub mod budget;
pub mod engine;
pub mod expense;
pub mod income;
mod lenient;
pub mod tax;

pub use budget::{BudgetError, BudgetSummary, summarize_budget};
pub use engine::BudgetEngine;
pub use expense::{ExpenseError, ExpenseRecord, ExpenseStats, project_yearly_expenses};
pub use income::{IncomeError, IncomeRecord, annualize_income};
pub use tax::{TaxCalculator, TaxError, compute_effective_tax_rate};
