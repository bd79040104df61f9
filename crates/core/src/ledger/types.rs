//! Ledger domain types for transaction validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Why a proposed transaction was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Amount is zero or negative.
    InvalidAmount,
    /// Deposit exceeds the year's allowed room.
    InsufficientRoom,
    /// Withdrawal exceeds the lifetime balance.
    InsufficientBalance,
}

/// Result of checking a proposed transaction.
///
/// Produced and consumed synchronously; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the transaction may be committed.
    pub accepted: bool,
    /// Rejection reason, when not accepted.
    pub reason: Option<RejectionReason>,
    /// Allowed room (deposits) or available balance (withdrawals) that the
    /// amount was compared with.
    pub room_or_balance_checked: Decimal,
}

impl ValidationOutcome {
    /// An accepted outcome.
    #[must_use]
    pub fn accept(checked: Decimal) -> Self {
        Self {
            accepted: true,
            reason: None,
            room_or_balance_checked: checked,
        }
    }

    /// A rejected outcome.
    #[must_use]
    pub fn reject(reason: RejectionReason, checked: Decimal) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            room_or_balance_checked: checked,
        }
    }

    /// Converts the outcome into the matching `LedgerError`.
    ///
    /// # Errors
    ///
    /// Returns the error that corresponds to the rejection reason.
    pub fn into_result(self) -> Result<Decimal, LedgerError> {
        match self.reason {
            None => Ok(self.room_or_balance_checked),
            Some(RejectionReason::InvalidAmount) => Err(LedgerError::InvalidAmount),
            Some(RejectionReason::InsufficientRoom) => Err(LedgerError::InsufficientRoom {
                allowed_room: self.room_or_balance_checked,
            }),
            Some(RejectionReason::InsufficientBalance) => Err(LedgerError::InsufficientBalance {
                available: self.room_or_balance_checked,
            }),
        }
    }
}
