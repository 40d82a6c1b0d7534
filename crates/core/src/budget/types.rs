//! Budget summary types.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Months used to spread yearly figures.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Derived budget overview. Never persisted.
///
/// The income fields are post-tax. `savings_rate` is measured against gross
/// yearly income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Yearly income net of tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub yearly_income: Decimal,
    /// Projected yearly expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub yearly_expenses: Decimal,
    /// `yearly_income / 12`.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_income: Decimal,
    /// `yearly_expenses / 12`.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_expenses: Decimal,
    /// `yearly_income - yearly_expenses`.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_income: Decimal,
    /// `net_income / 12`.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_monthly: Decimal,
    /// `net_income / gross yearly income * 100`, or 0 without gross income.
    #[serde(with = "rust_decimal::serde::float")]
    pub savings_rate: Decimal,
}

impl BudgetSummary {
    /// Builds the summary from yearly totals.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::Overflow` when the net income or savings rate
    /// does not fit a `Decimal`.
    pub fn from_totals(
        yearly_gross: Decimal,
        yearly_net: Decimal,
        yearly_expenses: Decimal,
    ) -> Result<Self, BudgetError> {
        let months = Decimal::from(MONTHS_PER_YEAR);
        let net_income = yearly_net
            .checked_sub(yearly_expenses)
            .ok_or(BudgetError::Overflow { field: "netIncome" })?;

        let savings_rate = if yearly_gross > Decimal::ZERO {
            net_income
                .checked_div(yearly_gross)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or(BudgetError::Overflow {
                    field: "savingsRate",
                })?
        } else {
            Decimal::ZERO
        };

        Ok(Self {
            yearly_income: yearly_net,
            yearly_expenses,
            monthly_income: yearly_net / months,
            monthly_expenses: yearly_expenses / months,
            net_income,
            net_monthly: net_income / months,
            savings_rate,
        })
    }

    /// Copy with every field rounded to `dp` decimal places for presentation.
    #[must_use]
    pub fn rounded(&self, dp: u32) -> Self {
        let round = |value: Decimal| {
            value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            yearly_income: round(self.yearly_income),
            yearly_expenses: round(self.yearly_expenses),
            monthly_income: round(self.monthly_income),
            monthly_expenses: round(self.monthly_expenses),
            net_income: round(self.net_income),
            net_monthly: round(self.net_monthly),
            savings_rate: round(self.savings_rate),
        }
    }
}
