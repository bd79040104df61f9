//! Ledger error types for validation and configuration errors.
//!
//! Every error here is recoverable: it is reported to the immediate caller and
//! nothing is fatal to the process. Validation is deterministic, so retrying
//! with the same inputs always yields the same error.

use chrono::NaiveDate;
use roomkeeper_shared::AppError;
use roomkeeper_shared::types::Dollars;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Amount is zero or negative.
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// Deposit exceeds the room available for its year.
    #[error(
        "You cannot deposit more than your available contribution room ({})",
        Dollars(*allowed_room)
    )]
    InsufficientRoom {
        /// Room that was checked against.
        allowed_room: Decimal,
    },

    /// Withdrawal exceeds the lifetime balance.
    #[error(
        "You cannot withdraw more than your current deposited balance ({})",
        Dollars(*available)
    )]
    InsufficientBalance {
        /// Balance that was checked against.
        available: Decimal,
    },

    /// Transaction date falls outside the accepted window.
    #[error("Transaction date {date} is outside the allowed range {earliest} to {latest}")]
    DateOutOfRange {
        /// The rejected date.
        date: NaiveDate,
        /// Earliest accepted date.
        earliest: NaiveDate,
        /// Latest accepted date.
        latest: NaiveDate,
    },

    /// Year cannot be represented as a calendar date.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    // ========== Eligibility Errors ==========
    /// Declared carryover is negative.
    #[error("Declared carryover cannot be negative: {0}")]
    InvalidCarryover(Decimal),

    /// A room calculation was requested before eligibility was configured.
    #[error("Eligibility has not been configured")]
    EligibilityNotConfigured,

    /// Informational: room has not started accruing yet.
    #[error("Not yet eligible until {first_eligible_year} (current year {current_year})")]
    NotYetEligible {
        /// First year room accrues.
        first_eligible_year: i32,
        /// The ledger's current year.
        current_year: i32,
    },
}

impl LedgerError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InsufficientRoom { .. } => "INSUFFICIENT_ROOM",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
            Self::InvalidYear(_) => "INVALID_YEAR",
            Self::InvalidCarryover(_) => "INVALID_CARRYOVER",
            Self::EligibilityNotConfigured => "ELIGIBILITY_NOT_CONFIGURED",
            Self::NotYetEligible { .. } => "NOT_YET_ELIGIBLE",
        }
    }

    /// Returns true if this is a room or balance rejection rather than bad input.
    #[must_use]
    pub fn is_limit_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientRoom { .. } | Self::InsufficientBalance { .. }
        )
    }

    /// Returns the room or balance figure the rejection was checked against.
    #[must_use]
    pub fn checked_bound(&self) -> Option<Decimal> {
        match self {
            Self::InsufficientRoom { allowed_room } => Some(*allowed_room),
            Self::InsufficientBalance { available } => Some(*available),
            _ => None,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientRoom { .. }
            | LedgerError::InsufficientBalance { .. }
            | LedgerError::NotYetEligible { .. } => Self::BusinessRule(err.to_string()),
            LedgerError::EligibilityNotConfigured => Self::Configuration(err.to_string()),
            LedgerError::InvalidAmount
            | LedgerError::DateOutOfRange { .. }
            | LedgerError::InvalidYear(_)
            | LedgerError::InvalidCarryover(_) => Self::Validation(err.to_string()),
        }
    }
}
