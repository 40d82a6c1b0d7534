//! Progressive tax bracket calculation.
//!
//! This module implements the effective tax rate computation:
//! - Bracket tables (validated, swappable, 2024 single-filer default)
//! - The calculator that applies a table to a yearly income
//! - Error types for table construction

pub mod bracket;
pub mod calculator;
pub mod error;

#[cfg(test)]
mod calculator_props;

pub use bracket::{BracketTable, TaxBracket};
pub use calculator::{TaxCalculator, compute_effective_tax_rate};
pub use error::TaxError;
