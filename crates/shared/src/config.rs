//! Application configuration management.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{CarryoverMode, TransactionKind};

/// Application configuration.
///
/// Every section has defaults, so an empty environment still yields a usable
/// configuration backed by the built-in limit table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Annual limit table and eligibility rules.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// The account holder's eligibility inputs, if known up front.
    #[serde(default)]
    pub profile: Option<ProfileConfig>,
    /// Overrides the wall-clock year (useful for replaying past years).
    #[serde(default)]
    pub current_year: Option<i32>,
    /// Transactions a host replays through the ledger at startup.
    #[serde(default)]
    pub transactions: Vec<TransactionConfig>,
}

/// Annual limit table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// First calendar year anyone could accrue room.
    #[serde(default = "default_inception_year")]
    pub inception_year: i32,
    /// Age at which a person starts accruing room.
    #[serde(default = "default_majority_age")]
    pub majority_age: i32,
    /// Limits that replace or extend the built-in table.
    #[serde(default)]
    pub overrides: Vec<LimitOverride>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            inception_year: default_inception_year(),
            majority_age: default_majority_age(),
            overrides: Vec::new(),
        }
    }
}

fn default_inception_year() -> i32 {
    2009
}

fn default_majority_age() -> i32 {
    18
}

/// A single configured annual limit.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitOverride {
    /// Calendar year.
    pub year: i32,
    /// Contribution limit for that year.
    pub limit: Decimal,
}

/// Eligibility inputs for the account holder.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Whether carryover is inferred or declared.
    #[serde(default)]
    pub mode: CarryoverMode,
    /// Carryover into the current year; required in declared mode.
    #[serde(default)]
    pub declared_carryover: Option<Decimal>,
}

/// A transaction declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionConfig {
    /// Transaction date.
    pub date: NaiveDate,
    /// Deposit or withdrawal.
    pub kind: TransactionKind,
    /// Positive amount.
    pub amount: Decimal,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `ROOMKEEPER__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ROOMKEEPER").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration from a single file plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("ROOMKEEPER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "RUN_MODE",
                "ROOMKEEPER__LIMITS__INCEPTION_YEAR",
                "ROOMKEEPER__CURRENT_YEAR",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.limits.inception_year, 2009);
                assert_eq!(config.limits.majority_age, 18);
                assert!(config.limits.overrides.is_empty());
                assert!(config.profile.is_none());
                assert!(config.current_year.is_none());
                assert!(config.transactions.is_empty());
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("ROOMKEEPER__LIMITS__INCEPTION_YEAR", Some("2010")),
                ("ROOMKEEPER__CURRENT_YEAR", Some("2025")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.limits.inception_year, 2010);
                assert_eq!(config.current_year, Some(2025));
            },
        );
    }

    #[test]
    fn test_load_from_sample_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/default.toml");
        temp_env::with_vars_unset(
            [
                "ROOMKEEPER__LIMITS__INCEPTION_YEAR",
                "ROOMKEEPER__CURRENT_YEAR",
            ],
            || {
                let config = AppConfig::load_from(path).unwrap();
                assert_eq!(config.current_year, Some(2025));
                let profile = config.profile.unwrap();
                assert_eq!(profile.mode, CarryoverMode::Declared);
                assert_eq!(profile.declared_carryover, Some(Decimal::from(93_000)));
                assert_eq!(config.transactions.len(), 2);
                assert_eq!(config.transactions[1].kind, TransactionKind::Withdrawal);
            },
        );
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(AppConfig::load_from("config/does-not-exist.toml").is_err());
    }
}
