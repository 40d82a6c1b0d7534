//! Effective tax rate calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use super::bracket::BracketTable;

/// Decimal places kept on an effective rate.
pub const RATE_DECIMAL_PLACES: u32 = 2;

/// Applies a progressive bracket table to yearly income.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxCalculator {
    table: BracketTable,
}

impl TaxCalculator {
    /// Creates a calculator over the given table.
    #[must_use]
    pub const fn new(table: BracketTable) -> Self {
        Self { table }
    }

    /// The table in use.
    #[must_use]
    pub fn table(&self) -> &BracketTable {
        &self.table
    }

    /// Total tax owed on `yearly_income`, unrounded.
    ///
    /// Each bracket taxes the part of the income inside `[min, max)`.
    /// Zero or negative income owes nothing.
    #[must_use]
    pub fn total_tax(&self, yearly_income: Decimal) -> Decimal {
        let mut total_tax = Decimal::ZERO;

        for bracket in self.table.brackets() {
            if yearly_income <= bracket.min {
                break;
            }
            total_tax += bracket.taxable_portion(yearly_income) * bracket.rate;
        }

        total_tax
    }

    /// Effective rate as a percentage rounded to 2 decimal places.
    ///
    /// Returns 0 for zero or negative income instead of dividing by zero.
    #[must_use]
    pub fn effective_rate(&self, yearly_income: Decimal) -> Decimal {
        if yearly_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        (self.total_tax(yearly_income) / yearly_income * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Effective tax rate under the 2024 single-filer table.
#[must_use]
pub fn compute_effective_tax_rate(yearly_income: Decimal) -> Decimal {
    TaxCalculator::default().effective_rate(yearly_income)
}
