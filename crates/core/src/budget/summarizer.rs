//! Budget summary composition.

use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::BudgetSummary;
use crate::expense::{ExpenseProjector, ExpenseRecord};
use crate::income::{IncomeAnnualizer, IncomeRecord};
use crate::tax::TaxCalculator;

/// Composes income annualization and expense projection into one summary.
pub struct BudgetSummarizer;

impl BudgetSummarizer {
    /// Summarizes the current set of income and expense records.
    ///
    /// Each income record is re-annualized from its terms; the stored
    /// `tax_rate` is not trusted. Records are accumulated in input order.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Income` for the first income record that breaks
    /// a required-field contract, and `Expense` or `Overflow` when a total
    /// does not fit a `Decimal`.
    pub fn summarize(
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        calculator: &TaxCalculator,
    ) -> Result<BudgetSummary, BudgetError> {
        let mut yearly_gross = Decimal::ZERO;
        let mut yearly_net = Decimal::ZERO;

        for income in incomes {
            let annualized = IncomeAnnualizer::annualize(&income.terms, calculator)
                .map_err(|source| BudgetError::Income {
                    id: income.id,
                    source,
                })?;
            yearly_gross = yearly_gross
                .checked_add(annualized.yearly_gross)
                .ok_or(BudgetError::Overflow {
                    field: "yearlyIncome",
                })?;
            yearly_net = yearly_net
                .checked_add(annualized.yearly_net)
                .ok_or(BudgetError::Overflow {
                    field: "yearlyIncome",
                })?;
        }

        let yearly_expenses = ExpenseProjector::project_yearly(expenses)?;

        BudgetSummary::from_totals(yearly_gross, yearly_net, yearly_expenses)
    }
}

/// Summarizes records under the 2024 single-filer table.
pub fn summarize_budget(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
) -> Result<BudgetSummary, BudgetError> {
    BudgetSummarizer::summarize(incomes, expenses, &TaxCalculator::default())
}
