//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tax table configuration.
    #[serde(default)]
    pub tax: TaxConfig,
    /// Summary runner configuration.
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// Tax table configuration.
///
/// When `brackets` is absent the engine uses the built-in 2024 single-filer table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxConfig {
    /// Optional replacement bracket table, in ascending order.
    #[serde(default)]
    pub brackets: Option<Vec<BracketConfig>>,
}

/// One configured tax bracket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BracketConfig {
    /// Inclusive lower bound of the bracket.
    pub min: Decimal,
    /// Exclusive upper bound, or `None` for the top bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Rate as a fraction (0.22 for 22%).
    pub rate: Decimal,
}

/// Summary runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// Path of the JSON record snapshot to summarize.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Decimal places used when presenting the summary.
    #[serde(default = "default_round_dp")]
    pub round_dp: u32,
    /// Optional `YYYY-MM` month for expense statistics.
    #[serde(default)]
    pub stats_month: Option<String>,
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

fn default_round_dp() -> u32 {
    2
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            round_dp: default_round_dp(),
            stats_month: None,
        }
    }
}

impl SummaryConfig {
    /// Parses `stats_month` into `(year, month)`.
    ///
    /// Returns `Ok(None)` when no month is configured.
    pub fn stats_period(&self) -> Result<Option<(i32, u32)>, config::ConfigError> {
        let Some(raw) = self.stats_month.as_deref() else {
            return Ok(None);
        };

        let invalid = || {
            config::ConfigError::Message(format!(
                "summary.stats_month must be YYYY-MM, got {raw:?}"
            ))
        };

        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Some((year, month)))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINTRACK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
