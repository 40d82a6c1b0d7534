//! Fintrack budget summary runner
//!
//! Reads a snapshot of income and expense records and prints one JSON report
//! with the refreshed income records, the budget summary and optional
//! monthly expense statistics.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fintrack_core::expense::{ExpenseRecord, validate_expense};
use fintrack_core::income::IncomeRecord;
use fintrack_core::{BudgetEngine, BudgetSummary, ExpenseStats};
use fintrack_shared::AppConfig;

/// Records to summarize, as stored on disk.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    incomes: Vec<IncomeRecord>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

/// Everything printed on stdout, as a single JSON document.
#[derive(Debug, Serialize)]
struct Report {
    /// Income records with their tax rate recomputed.
    incomes: Vec<IncomeRecord>,
    summary: BudgetSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ExpenseStats>,
}

impl Snapshot {
    fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))
    }
}

/// Refreshes stored tax rates and builds the report.
fn build_report(
    engine: &BudgetEngine,
    snapshot: Snapshot,
    config: &AppConfig,
) -> anyhow::Result<Report> {
    let incomes = snapshot
        .incomes
        .into_iter()
        .map(|record| {
            let id = record.id;
            let previous = record.tax_rate;
            let refreshed = engine
                .refresh_tax_rate(record)
                .with_context(|| format!("Income {id} is invalid"))?;
            if refreshed.tax_rate != previous {
                info!(
                    income_id = %id,
                    %previous,
                    current = %refreshed.tax_rate,
                    "Tax rate refreshed"
                );
            }
            Ok(refreshed)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for expense in &snapshot.expenses {
        if let Err(err) = validate_expense(expense) {
            warn!(expense_id = %expense.id, error = %err, "Expense outside accepted bounds");
        }
    }

    let summary = engine
        .summarize_budget(&incomes, &snapshot.expenses)?
        .rounded(config.summary.round_dp);
    info!(
        incomes = incomes.len(),
        expenses = snapshot.expenses.len(),
        yearly_income = %summary.yearly_income,
        savings_rate = %summary.savings_rate,
        "Budget summarized"
    );

    let stats = match config.summary.stats_period()? {
        Some((year, month)) => {
            let stats = engine.expense_stats(&snapshot.expenses, year, month)?;
            info!(year, month, monthly_total = %stats.monthly_total, "Expense stats computed");
            Some(stats)
        }
        None => None,
    };

    Ok(Report {
        incomes,
        summary,
        stats,
    })
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let engine = BudgetEngine::from_config(&config.tax).context("Invalid tax table")?;
    info!(
        brackets = engine.calculator().table().brackets().len(),
        "Tax table loaded"
    );

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(&config.summary.snapshot_path), PathBuf::from);
    let snapshot = Snapshot::read(&path)?;
    info!(path = %path.display(), "Snapshot loaded");

    let report = build_report(&engine, snapshot, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
