//! Income write-path: attaching and refreshing the stored tax rate.

use fintrack_shared::types::IncomeId;

use super::annualizer::IncomeAnnualizer;
use super::error::IncomeError;
use super::types::{IncomeDraft, IncomeRecord, IncomeTerms, IncomeUpdate};
use super::validation::{validate_draft, validate_update};
use crate::tax::TaxCalculator;

/// Income service for business logic on create and update.
pub struct IncomeService;

impl IncomeService {
    /// Validates a draft and turns it into a record with its tax rate attached.
    ///
    /// # Errors
    ///
    /// Returns an `IncomeError` naming the first offending field.
    pub fn prepare(
        id: IncomeId,
        draft: IncomeDraft,
        calculator: &TaxCalculator,
    ) -> Result<IncomeRecord, IncomeError> {
        validate_draft(&draft)?;
        let annualized = IncomeAnnualizer::annualize(&draft.terms, calculator)?;

        Ok(IncomeRecord {
            id,
            description: draft.description.trim().to_string(),
            date: draft.date,
            terms: draft.terms,
            tax_rate: annualized.effective_tax_rate,
        })
    }

    /// Merges an update over a stored record and recomputes its tax rate.
    ///
    /// The tax rate is recomputed even when no earning field changed.
    pub fn apply_update(
        record: &IncomeRecord,
        update: IncomeUpdate,
        calculator: &TaxCalculator,
    ) -> Result<IncomeRecord, IncomeError> {
        validate_update(&update)?;

        let terms = IncomeTerms {
            amount: update.amount.unwrap_or(record.terms.amount),
            income_type: update.income_type.unwrap_or(record.terms.income_type),
            pay_frequency: update.pay_frequency.or(record.terms.pay_frequency),
            hours_per_week: update.hours_per_week.or(record.terms.hours_per_week),
        };
        let annualized = IncomeAnnualizer::annualize(&terms, calculator)?;

        Ok(IncomeRecord {
            id: record.id,
            description: update.description.map_or_else(
                || record.description.clone(),
                |description| description.trim().to_string(),
            ),
            date: update.date.unwrap_or(record.date),
            terms,
            tax_rate: annualized.effective_tax_rate,
        })
    }

    /// Returns the record with its tax rate recomputed from current terms.
    pub fn refresh_tax_rate(
        record: IncomeRecord,
        calculator: &TaxCalculator,
    ) -> Result<IncomeRecord, IncomeError> {
        let annualized = IncomeAnnualizer::annualize(&record.terms, calculator)?;
        Ok(IncomeRecord {
            tax_rate: annualized.effective_tax_rate,
            ..record
        })
    }
}
