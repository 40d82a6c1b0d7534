//! Income data types.

use chrono::NaiveDate;
use fintrack_shared::types::IncomeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lenient::lenient_option;

/// Pay periods assumed when a salary has no recognized pay frequency.
pub const DEFAULT_PAY_PERIODS: u32 = 24;

/// Weeks used to annualize hourly income.
pub const WEEKS_PER_YEAR: u32 = 52;

/// How an income source is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    /// Fixed amount per pay period.
    Salary,
    /// Hourly rate times hours worked.
    Hourly,
}

/// Salary pay frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    /// Every two weeks (26 periods).
    Biweekly,
    /// Twice a month (24 periods).
    Semimonthly,
}

impl PayFrequency {
    /// Number of pay periods in a year.
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Self::Biweekly => 26,
            Self::Semimonthly => 24,
        }
    }

    /// Periods for an optional frequency; unset falls back to semimonthly.
    #[must_use]
    pub const fn periods_or_default(frequency: Option<Self>) -> u32 {
        match frequency {
            Some(frequency) => frequency.periods_per_year(),
            None => DEFAULT_PAY_PERIODS,
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Biweekly => write!(f, "biweekly"),
            Self::Semimonthly => write!(f, "semimonthly"),
        }
    }
}

impl std::str::FromStr for PayFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "biweekly" => Ok(Self::Biweekly),
            "semimonthly" => Ok(Self::Semimonthly),
            _ => Err(format!("Unknown pay frequency: {s}")),
        }
    }
}

/// The fields that determine how much an income source earns per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTerms {
    /// Pay-period amount (salary) or hourly rate (hourly).
    pub amount: Decimal,
    /// Salary or hourly.
    pub income_type: IncomeType,
    /// Salary pay frequency. Unrecognized values read as unset.
    #[serde(default, deserialize_with = "lenient_option")]
    pub pay_frequency: Option<PayFrequency>,
    /// Hours worked per week (hourly only).
    #[serde(default)]
    pub hours_per_week: Option<Decimal>,
}

impl IncomeTerms {
    /// Salary terms.
    #[must_use]
    pub const fn salary(amount: Decimal, pay_frequency: Option<PayFrequency>) -> Self {
        Self {
            amount,
            income_type: IncomeType::Salary,
            pay_frequency,
            hours_per_week: None,
        }
    }

    /// Hourly terms.
    #[must_use]
    pub const fn hourly(rate: Decimal, hours_per_week: Decimal) -> Self {
        Self {
            amount: rate,
            income_type: IncomeType::Hourly,
            pay_frequency: None,
            hours_per_week: Some(hours_per_week),
        }
    }
}

/// Income as submitted for creation, before a tax rate is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeDraft {
    /// Free-text label.
    pub description: String,
    /// Date the income was recorded for.
    pub date: NaiveDate,
    /// Earning terms.
    #[serde(flatten)]
    pub terms: IncomeTerms,
}

/// A stored income source with its derived tax rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    /// Record ID.
    pub id: IncomeId,
    /// Free-text label.
    pub description: String,
    /// Date the income was recorded for.
    pub date: NaiveDate,
    /// Earning terms.
    #[serde(flatten)]
    pub terms: IncomeTerms,
    /// Effective tax rate percentage derived from the annualized gross.
    #[serde(default)]
    pub tax_rate: Decimal,
}

/// Partial update to a stored income source.
///
/// Present fields replace stored values; the tax rate is always recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    /// New amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New income type.
    #[serde(default)]
    pub income_type: Option<IncomeType>,
    /// New pay frequency.
    #[serde(default)]
    pub pay_frequency: Option<PayFrequency>,
    /// New hours per week.
    #[serde(default)]
    pub hours_per_week: Option<Decimal>,
    /// New date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Result of annualizing one income source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualizedIncome {
    /// Pre-tax yearly income.
    #[serde(with = "rust_decimal::serde::float")]
    pub yearly_gross: Decimal,
    /// Yearly income after the effective tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub yearly_net: Decimal,
    /// Effective tax rate percentage, 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub effective_tax_rate: Decimal,
}
