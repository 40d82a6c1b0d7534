//! Expense data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fintrack_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lenient::lenient_option;

/// Multiplier applied to a recurring expense with no recognized frequency.
pub const DEFAULT_YEARLY_MULTIPLIER: u32 = 1;

/// How often a recurring expense repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every two weeks.
    Biweekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
}

impl RecurringFrequency {
    /// Occurrences per year.
    #[must_use]
    pub const fn yearly_multiplier(self) -> u32 {
        match self {
            Self::Daily => 365,
            Self::Weekly => 52,
            Self::Biweekly => 26,
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }

    /// Occurrences for an optional frequency; unset counts once a year.
    #[must_use]
    pub const fn multiplier_or_default(frequency: Option<Self>) -> u32 {
        match frequency {
            Some(frequency) => frequency.yearly_multiplier(),
            None => DEFAULT_YEARLY_MULTIPLIER,
        }
    }
}

impl std::fmt::Display for RecurringFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Biweekly => write!(f, "biweekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl std::str::FromStr for RecurringFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown recurring frequency: {s}")),
        }
    }
}

/// Spending category.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Groceries and dining.
    Food,
    /// Commuting and travel.
    Transport,
    /// Leisure.
    Entertainment,
    /// Power, water, internet.
    Utilities,
    /// Medical costs.
    Healthcare,
    /// Retail purchases.
    Shopping,
    /// Anything else.
    #[default]
    Other,
}

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Record ID.
    pub id: ExpenseId,
    /// Per-occurrence amount.
    pub amount: Decimal,
    /// Free-text label.
    #[serde(default)]
    pub description: String,
    /// Spending category.
    #[serde(default)]
    pub category: ExpenseCategory,
    /// Date the expense was recorded for.
    pub date: NaiveDate,
    /// Whether the expense repeats.
    #[serde(default)]
    pub is_recurring: bool,
    /// Repeat frequency. Unrecognized values read as unset.
    #[serde(default, deserialize_with = "lenient_option")]
    pub recurring_frequency: Option<RecurringFrequency>,
}

impl ExpenseRecord {
    /// This record's contribution to a yearly projection.
    ///
    /// One-off expenses count once; any frequency on them is ignored.
    /// Returns `None` when the projection does not fit a `Decimal`.
    #[must_use]
    pub fn yearly_amount(&self) -> Option<Decimal> {
        if !self.is_recurring {
            return Some(self.amount);
        }
        self.amount.checked_mul(Decimal::from(RecurringFrequency::multiplier_or_default(
            self.recurring_frequency,
        )))
    }
}

/// Spending statistics over raw (unprojected) amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    /// Sum of every amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// Per-category sums, only for categories present.
    #[serde(with = "float_values")]
    pub category_breakdown: BTreeMap<ExpenseCategory, Decimal>,
    /// Sum of amounts dated in the reference month.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_total: Decimal,
    /// `monthly_total` spread over the days of the reference month, 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_daily: Decimal,
}

/// Serializes a category map with each total as a JSON number.
mod float_values {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ExpenseCategory;

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Float(#[serde(with = "rust_decimal::serde::float")] Decimal);

    pub fn serialize<S>(
        map: &BTreeMap<ExpenseCategory, Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(category, total)| (category, Float(*total))))
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<ExpenseCategory, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<ExpenseCategory, Float>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(category, Float(total))| (category, total))
            .collect())
    }
}
