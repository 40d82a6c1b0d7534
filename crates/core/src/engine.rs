//! Budget engine: one entry point over a shared tax table.
//!
//! The engine owns the [`TaxCalculator`] so every calculation made through it
//! agrees on the bracket table, whether that is the built-in 2024 table or one
//! loaded from configuration.

use fintrack_shared::TaxConfig;
use fintrack_shared::types::IncomeId;
use rust_decimal::Decimal;

use crate::budget::{BudgetError, BudgetSummarizer, BudgetSummary};
use crate::expense::{ExpenseError, ExpenseProjector, ExpenseRecord, ExpenseStats};
use crate::income::{
    AnnualizedIncome, IncomeAnnualizer, IncomeDraft, IncomeError, IncomeRecord, IncomeService,
    IncomeTerms, IncomeUpdate,
};
use crate::tax::{BracketTable, TaxCalculator, TaxError};

/// Stateless facade over the budget calculations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetEngine {
    calculator: TaxCalculator,
}

impl BudgetEngine {
    /// Creates an engine over the given bracket table.
    #[must_use]
    pub const fn new(table: BracketTable) -> Self {
        Self {
            calculator: TaxCalculator::new(table),
        }
    }

    /// Creates an engine from configuration.
    ///
    /// Falls back to the built-in table when no brackets are configured.
    ///
    /// # Errors
    ///
    /// Returns a `TaxError` if the configured table is malformed.
    pub fn from_config(config: &TaxConfig) -> Result<Self, TaxError> {
        match config.brackets.as_deref() {
            Some(brackets) => Ok(Self::new(BracketTable::from_config(brackets)?)),
            None => Ok(Self::default()),
        }
    }

    /// The calculator in use.
    #[must_use]
    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    /// Effective tax rate percentage for a yearly income.
    #[must_use]
    pub fn effective_tax_rate(&self, yearly_income: Decimal) -> Decimal {
        self.calculator.effective_rate(yearly_income)
    }

    /// Annualizes one income source.
    pub fn annualize_income(&self, terms: &IncomeTerms) -> Result<AnnualizedIncome, IncomeError> {
        IncomeAnnualizer::annualize(terms, &self.calculator)
    }

    /// Validates a new income and attaches its tax rate.
    pub fn prepare_income(
        &self,
        id: IncomeId,
        draft: IncomeDraft,
    ) -> Result<IncomeRecord, IncomeError> {
        IncomeService::prepare(id, draft, &self.calculator)
    }

    /// Applies a partial update to a stored income and recomputes its tax rate.
    pub fn apply_income_update(
        &self,
        record: &IncomeRecord,
        update: IncomeUpdate,
    ) -> Result<IncomeRecord, IncomeError> {
        IncomeService::apply_update(record, update, &self.calculator)
    }

    /// Recomputes the stored tax rate of a record.
    pub fn refresh_tax_rate(&self, record: IncomeRecord) -> Result<IncomeRecord, IncomeError> {
        IncomeService::refresh_tax_rate(record, &self.calculator)
    }

    /// Projected yearly total over all expenses.
    pub fn project_yearly_expenses(
        &self,
        expenses: &[ExpenseRecord],
    ) -> Result<Decimal, ExpenseError> {
        ExpenseProjector::project_yearly(expenses)
    }

    /// Spending statistics for a calendar month.
    pub fn expense_stats(
        &self,
        expenses: &[ExpenseRecord],
        year: i32,
        month: u32,
    ) -> Result<ExpenseStats, ExpenseError> {
        ExpenseStats::compute(expenses, year, month)
    }

    /// Budget summary over the current records.
    pub fn summarize_budget(
        &self,
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
    ) -> Result<BudgetSummary, BudgetError> {
        BudgetSummarizer::summarize(incomes, expenses, &self.calculator)
    }
}
