//! Roomkeeper calculator
//!
//! Loads the account holder's profile and transactions from configuration,
//! replays them through the ledger and prints the resulting room report as
//! JSON.
//!
//! Usage: `roomkeeper [CONFIG_FILE]`. Without an argument the layered
//! `config/default`, `config/{RUN_MODE}` and environment sources are used.

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomkeeper_core::{AnnualSummary, ContributionLedger, RoomSnapshot, Transaction, YearSummary};
use roomkeeper_shared::AppConfig;

/// Everything printed for one run.
#[derive(Debug, Serialize)]
struct Report<'a> {
    current_year: i32,
    first_eligible_year: i32,
    warning: Option<String>,
    snapshot: RoomSnapshot,
    summary: AnnualSummary,
    overview: Vec<YearSummary>,
    transactions: Vec<&'a Transaction>,
    rejected: Vec<Rejected>,
}

/// A configured transaction the ledger refused.
#[derive(Debug, Serialize)]
struct Rejected {
    index: usize,
    code: &'static str,
    message: String,
    /// Room or balance the amount was checked against, for limit rejections.
    bound: Option<Decimal>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomkeeper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from(&path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    let mut ledger = ContributionLedger::from_config(&config)?;

    let Some(eligibility) = ledger.eligibility().copied() else {
        anyhow::bail!("No profile configured; set profile.birth_date in config/default.toml");
    };
    info!(
        current_year = ledger.current_year(),
        first_eligible_year = eligibility.profile.first_eligible_year,
        transactions = config.transactions.len(),
        "Replaying configured transactions"
    );

    let mut rejected = Vec::new();
    for (index, tx) in config.transactions.iter().enumerate() {
        if let Err(err) = ledger.commit_transaction(tx.date, tx.kind, tx.amount) {
            if err.is_limit_rejection() {
                warn!(index, code = err.error_code(), %err, "Configured transaction over limit");
            } else {
                warn!(index, code = err.error_code(), %err, "Configured transaction invalid");
            }
            rejected.push(Rejected {
                index,
                code: err.error_code(),
                message: err.to_string(),
                bound: err.checked_bound(),
            });
        }
    }

    let report = Report {
        current_year: ledger.current_year(),
        first_eligible_year: eligibility.profile.first_eligible_year,
        warning: ledger.eligibility_warning().as_ref().map(ToString::to_string),
        snapshot: ledger.current_room_snapshot()?,
        summary: ledger.summarize(ledger.current_year())?,
        overview: ledger.yearly_overview()?,
        transactions: ledger.transactions_newest_first(),
        rejected,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
