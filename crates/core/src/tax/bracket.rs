//! Tax bracket tables.

use std::sync::Arc;

use fintrack_shared::BracketConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TaxError;

/// One progressive bracket covering `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound.
    pub min: Decimal,
    /// Exclusive upper bound, `None` for the top bracket.
    pub max: Option<Decimal>,
    /// Rate as a fraction (0.22 for 22%).
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket.
    #[must_use]
    pub const fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }

    /// Portion of `income` that falls inside this bracket.
    #[must_use]
    pub fn taxable_portion(&self, income: Decimal) -> Decimal {
        if income <= self.min {
            return Decimal::ZERO;
        }
        let upper = self.max.map_or(income, |max| income.min(max));
        upper - self.min
    }
}

impl From<&BracketConfig> for TaxBracket {
    fn from(config: &BracketConfig) -> Self {
        Self::new(config.min, config.max, config.rate)
    }
}

/// An ordered, contiguous table of brackets starting at zero.
///
/// Cloning is cheap; the brackets are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    brackets: Arc<[TaxBracket]>,
}

impl BracketTable {
    /// Builds a table after checking it covers `[0, ∞)` without gaps.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, TaxError> {
        let first = brackets.first().ok_or(TaxError::EmptyTable)?;
        if !first.min.is_zero() {
            return Err(TaxError::FirstBracketNotZero { min: first.min });
        }

        let last_index = brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.min != expected_min {
                return Err(TaxError::NotContiguous {
                    index,
                    expected: expected_min,
                    found: bracket.min,
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(TaxError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }
            match bracket.max {
                Some(max) if max <= bracket.min => {
                    return Err(TaxError::EmptyBracket {
                        index,
                        min: bracket.min,
                        max,
                    });
                }
                Some(_) if index == last_index => return Err(TaxError::BoundedTopBracket),
                Some(max) => expected_min = max,
                None if index != last_index => return Err(TaxError::UnboundedNotLast { index }),
                None => {}
            }
        }

        Ok(Self {
            brackets: brackets.into(),
        })
    }

    /// Builds a table from configured brackets.
    pub fn from_config(brackets: &[BracketConfig]) -> Result<Self, TaxError> {
        Self::new(brackets.iter().map(TaxBracket::from).collect())
    }

    /// 2024 US federal brackets for a single filer, annual USD.
    #[must_use]
    pub fn us_federal_2024_single() -> Self {
        let bounds: [(i64, Option<i64>, i64); 7] = [
            (0, Some(11_600), 10),
            (11_600, Some(47_150), 12),
            (47_150, Some(100_525), 22),
            (100_525, Some(191_950), 24),
            (191_950, Some(243_725), 32),
            (243_725, Some(609_350), 35),
            (609_350, None, 37),
        ];

        let brackets: Vec<TaxBracket> = bounds
            .iter()
            .map(|&(min, max, percent)| {
                TaxBracket::new(
                    Decimal::from(min),
                    max.map(Decimal::from),
                    Decimal::new(percent, 2),
                )
            })
            .collect();

        Self {
            brackets: brackets.into(),
        }
    }

    /// The brackets in ascending order.
    #[must_use]
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Rate of the top bracket.
    #[must_use]
    pub fn top_rate(&self) -> Decimal {
        self.brackets
            .last()
            .map_or(Decimal::ZERO, |bracket| bracket.rate)
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        Self::us_federal_2024_single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bracket(min: Decimal, max: Option<Decimal>, rate: Decimal) -> TaxBracket {
        TaxBracket::new(min, max, rate)
    }

    #[test]
    fn test_default_table_matches_2024_single_filer() {
        let table = BracketTable::default();
        let brackets = table.brackets();

        assert_eq!(brackets.len(), 7);
        assert_eq!(brackets[0], bracket(dec!(0), Some(dec!(11600)), dec!(0.10)));
        assert_eq!(brackets[1], bracket(dec!(11600), Some(dec!(47150)), dec!(0.12)));
        assert_eq!(brackets[2], bracket(dec!(47150), Some(dec!(100525)), dec!(0.22)));
        assert_eq!(brackets[3], bracket(dec!(100525), Some(dec!(191950)), dec!(0.24)));
        assert_eq!(brackets[4], bracket(dec!(191950), Some(dec!(243725)), dec!(0.32)));
        assert_eq!(brackets[5], bracket(dec!(243725), Some(dec!(609350)), dec!(0.35)));
        assert_eq!(brackets[6], bracket(dec!(609350), None, dec!(0.37)));
        assert_eq!(table.top_rate(), dec!(0.37));
    }

    #[test]
    fn test_default_table_passes_validation() {
        let rebuilt = BracketTable::new(BracketTable::default().brackets().to_vec()).unwrap();
        assert_eq!(rebuilt, BracketTable::default());
    }

    #[test]
    fn test_taxable_portion_half_open() {
        let b = bracket(dec!(11600), Some(dec!(47150)), dec!(0.12));

        assert_eq!(b.taxable_portion(dec!(11600)), dec!(0));
        assert_eq!(b.taxable_portion(dec!(20000)), dec!(8400));
        assert_eq!(b.taxable_portion(dec!(47150)), dec!(35550));
        assert_eq!(b.taxable_portion(dec!(90000)), dec!(35550));
    }

    #[test]
    fn test_taxable_portion_unbounded() {
        let b = bracket(dec!(609350), None, dec!(0.37));
        assert_eq!(b.taxable_portion(dec!(700000)), dec!(90650));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(BracketTable::new(vec![]), Err(TaxError::EmptyTable));
    }

    #[test]
    fn test_rejects_nonzero_start() {
        let result = BracketTable::new(vec![bracket(dec!(100), None, dec!(0.1))]);
        assert_eq!(result, Err(TaxError::FirstBracketNotZero { min: dec!(100) }));
    }

    #[test]
    fn test_rejects_gap() {
        let result = BracketTable::new(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0.1)),
            bracket(dec!(1200), None, dec!(0.2)),
        ]);
        assert_eq!(
            result,
            Err(TaxError::NotContiguous {
                index: 1,
                expected: dec!(1000),
                found: dec!(1200),
            })
        );
    }

    #[test]
    fn test_rejects_inverted_bracket() {
        let result = BracketTable::new(vec![
            bracket(dec!(0), Some(dec!(0)), dec!(0.1)),
            bracket(dec!(0), None, dec!(0.2)),
        ]);
        assert!(matches!(result, Err(TaxError::EmptyBracket { index: 0, .. })));
    }

    #[test]
    fn test_rejects_rate_out_of_range() {
        let result = BracketTable::new(vec![bracket(dec!(0), None, dec!(1.2))]);
        assert!(matches!(result, Err(TaxError::RateOutOfRange { index: 0, .. })));

        let result = BracketTable::new(vec![bracket(dec!(0), None, dec!(-0.1))]);
        assert!(matches!(result, Err(TaxError::RateOutOfRange { index: 0, .. })));
    }

    #[test]
    fn test_rejects_unbounded_in_middle() {
        let result = BracketTable::new(vec![
            bracket(dec!(0), None, dec!(0.1)),
            bracket(dec!(1000), None, dec!(0.2)),
        ]);
        assert_eq!(result, Err(TaxError::UnboundedNotLast { index: 0 }));
    }

    #[test]
    fn test_rejects_bounded_top() {
        let result = BracketTable::new(vec![
            bracket(dec!(0), Some(dec!(1000)), dec!(0.1)),
            bracket(dec!(1000), Some(dec!(5000)), dec!(0.2)),
        ]);
        assert_eq!(result, Err(TaxError::BoundedTopBracket));
    }

    #[test]
    fn test_from_config() {
        let configured = vec![
            BracketConfig {
                min: dec!(0),
                max: Some(dec!(10000)),
                rate: dec!(0),
            },
            BracketConfig {
                min: dec!(10000),
                max: None,
                rate: dec!(0.25),
            },
        ];

        let table = BracketTable::from_config(&configured).unwrap();
        assert_eq!(table.brackets().len(), 2);
        assert_eq!(table.top_rate(), dec!(0.25));
    }
}
