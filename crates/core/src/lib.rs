//! Core business logic for Roomkeeper.
//!
//! This crate contains the contribution room rules with no I/O of its own.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `limits` - Annual contribution limit table
//! - `eligibility` - First eligible year and accrued room
//! - `ledger` - Transaction log, room validation and the ledger facade
//! - `reports` - Monthly and yearly summaries

pub mod eligibility;
pub mod ledger;
pub mod limits;
pub mod reports;

pub use eligibility::{CarryoverBasis, EligibilityCalculator, EligibilityProfile};
pub use ledger::{ContributionLedger, LedgerError, Transaction, ValidationOutcome};
pub use limits::{AnnualLimit, AnnualLimitTable, LimitTableError};
pub use reports::{AnnualSummary, MonthlySummary, RoomSnapshot, YearSummary};
