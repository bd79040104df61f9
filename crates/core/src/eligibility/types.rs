//! Eligibility domain types.

use chrono::NaiveDate;
use roomkeeper_shared::types::CarryoverMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::error::LedgerError;

/// Who the account holder is, as far as room accrual is concerned.
///
/// Derived from the birth date; rebuild it whenever the birth date changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityProfile {
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// First calendar year in which room accrues.
    pub first_eligible_year: i32,
}

impl EligibilityProfile {
    /// Returns true if room accrues in `year`.
    #[must_use]
    pub fn is_eligible_in(&self, year: i32) -> bool {
        year >= self.first_eligible_year
    }
}

/// Source of the carryover into the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "carryover", rename_all = "lowercase")]
pub enum CarryoverBasis {
    /// Never contributed: carryover is every limit since the first eligible year.
    Inferred,
    /// Contributed before: the caller states the unused room brought forward.
    Declared(Decimal),
}

impl CarryoverBasis {
    /// Builds a basis from a mode and an optional declared figure.
    ///
    /// A missing declared figure counts as zero carryover.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCarryover` if the declared figure is negative.
    pub fn from_mode(mode: CarryoverMode, declared: Option<Decimal>) -> Result<Self, LedgerError> {
        match mode {
            CarryoverMode::Inferred => Ok(Self::Inferred),
            CarryoverMode::Declared => {
                let carryover = declared.unwrap_or(Decimal::ZERO);
                if carryover < Decimal::ZERO {
                    return Err(LedgerError::InvalidCarryover(carryover));
                }
                Ok(Self::Declared(carryover))
            }
        }
    }

    /// Returns the mode without its payload.
    #[must_use]
    pub fn mode(&self) -> CarryoverMode {
        match self {
            Self::Inferred => CarryoverMode::Inferred,
            Self::Declared(_) => CarryoverMode::Declared,
        }
    }
}
