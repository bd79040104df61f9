//! Logged transaction record.

use chrono::{Datelike, NaiveDate};
use roomkeeper_shared::types::{TransactionId, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A deposit or withdrawal recorded in the store.
///
/// Records are never edited in place; a correction is a delete followed by a
/// new commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store.
    pub id: TransactionId,
    /// Date the transaction is recorded for.
    pub date: NaiveDate,
    /// Deposit or withdrawal.
    pub kind: TransactionKind,
    /// Positive amount.
    pub amount: Decimal,
}

impl Transaction {
    /// Calendar year of the transaction.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month of the transaction (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns true for deposits.
    #[must_use]
    pub fn is_deposit(&self) -> bool {
        self.kind == TransactionKind::Deposit
    }

    /// Returns true for withdrawals.
    #[must_use]
    pub fn is_withdrawal(&self) -> bool {
        self.kind == TransactionKind::Withdrawal
    }

    /// Effect on the cash balance: positive for deposits, negative for withdrawals.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}
