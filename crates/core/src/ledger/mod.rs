//! Contribution ledger: transaction log, room validation and the facade
//! hosts call into.
//!
//! - `store` - Append-only transaction log with per-year aggregates
//! - `validation` - Deposit room and withdrawal balance rules
//! - `service` - [`ContributionLedger`], the public entry point
//! - `error` - Error types for ledger operations

pub mod error;
pub mod service;
pub mod store;
pub mod transaction;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use service::{ContributionLedger, Eligibility};
pub use store::TransactionStore;
pub use transaction::Transaction;
pub use types::{RejectionReason, ValidationOutcome};
pub use validation::{RoomBaseline, RoomValidator};
