//! Yearly projection of a single income source.

use rust_decimal::Decimal;

use super::error::IncomeError;
use super::types::{AnnualizedIncome, IncomeTerms, IncomeType, PayFrequency, WEEKS_PER_YEAR};
use crate::tax::TaxCalculator;

/// Converts income terms into yearly gross and net figures.
pub struct IncomeAnnualizer;

impl IncomeAnnualizer {
    /// Pre-tax yearly income for the given terms.
    ///
    /// - hourly: `amount * hours_per_week * 52`
    /// - salary: `amount * 26` when biweekly, otherwise `amount * 24`
    ///
    /// # Errors
    ///
    /// Returns `IncomeError::NonPositiveAmount` for an amount of zero or less,
    /// `MissingHoursPerWeek` / `NonPositiveHoursPerWeek` for hourly terms
    /// without usable hours, and `Overflow` when the yearly figure does not fit
    /// a `Decimal`.
    pub fn yearly_gross(terms: &IncomeTerms) -> Result<Decimal, IncomeError> {
        if terms.amount <= Decimal::ZERO {
            return Err(IncomeError::NonPositiveAmount(terms.amount));
        }

        match terms.income_type {
            IncomeType::Hourly => {
                let hours = terms.hours_per_week.ok_or(IncomeError::MissingHoursPerWeek)?;
                if hours <= Decimal::ZERO {
                    return Err(IncomeError::NonPositiveHoursPerWeek(hours));
                }
                terms
                    .amount
                    .checked_mul(hours)
                    .and_then(|weekly| weekly.checked_mul(Decimal::from(WEEKS_PER_YEAR)))
                    .ok_or(IncomeError::Overflow {
                        field: "hoursPerWeek",
                    })
            }
            IncomeType::Salary => {
                let periods = PayFrequency::periods_or_default(terms.pay_frequency);
                terms
                    .amount
                    .checked_mul(Decimal::from(periods))
                    .ok_or(IncomeError::Overflow { field: "amount" })
            }
        }
    }

    /// Annualizes the terms and applies the calculator's effective rate.
    ///
    /// `yearly_net = yearly_gross * (1 - effective_tax_rate / 100)`, using the
    /// rounded rate that gets stored on the record.
    pub fn annualize(
        terms: &IncomeTerms,
        calculator: &TaxCalculator,
    ) -> Result<AnnualizedIncome, IncomeError> {
        let yearly_gross = Self::yearly_gross(terms)?;
        let effective_tax_rate = calculator.effective_rate(yearly_gross);
        // The rate never exceeds 100, so the net never exceeds the gross.
        let yearly_net =
            yearly_gross * (Decimal::ONE - effective_tax_rate / Decimal::ONE_HUNDRED);

        Ok(AnnualizedIncome {
            yearly_gross,
            yearly_net,
            effective_tax_rate,
        })
    }
}

/// Annualizes income under the 2024 single-filer table.
pub fn annualize_income(terms: &IncomeTerms) -> Result<AnnualizedIncome, IncomeError> {
    IncomeAnnualizer::annualize(terms, &TaxCalculator::default())
}
