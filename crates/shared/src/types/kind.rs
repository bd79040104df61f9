//! Small domain enums shared by the core and its hosts.

use serde::{Deserialize, Serialize};

/// Direction of a logged transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money paid into the account; consumes contribution room.
    Deposit,
    /// Money taken out; bounded by the lifetime balance.
    Withdrawal,
}

impl TransactionKind {
    /// Returns the lowercase label used in logs and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            other => Err(format!("Unknown transaction kind: {other}")),
        }
    }
}

/// How the carryover into the current year is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarryoverMode {
    /// The person never contributed; room accrues from the first eligible year.
    #[default]
    Inferred,
    /// The person contributed before and states the carryover themselves.
    Declared,
}
