//! Contribution ledger facade.
//!
//! Owns one account holder's eligibility settings and transaction log and
//! exposes the operations a host (form, page, API handler) calls. Each session
//! should own its own ledger; mutation takes `&mut self`, so a single ledger is
//! never mutated from two places at once.

use chrono::{Datelike, NaiveDate, Utc};
use roomkeeper_shared::AppConfig;
use roomkeeper_shared::AppError;
use roomkeeper_shared::types::{CarryoverMode, TransactionId, TransactionKind};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::error::LedgerError;
use super::store::TransactionStore;
use super::transaction::Transaction;
use super::types::ValidationOutcome;
use super::validation::{RoomBaseline, RoomValidator};
use crate::eligibility::{CarryoverBasis, EligibilityCalculator, EligibilityProfile};
use crate::reports::{AnnualSummary, RoomSnapshot, SummaryService, YearSummary};

/// Eligibility settings chosen by the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    /// Derived from the birth date.
    pub profile: EligibilityProfile,
    /// Inferred or declared carryover.
    pub basis: CarryoverBasis,
}

/// One account holder's contribution ledger.
#[derive(Debug, Clone)]
pub struct ContributionLedger {
    calculator: EligibilityCalculator,
    store: TransactionStore,
    eligibility: Option<Eligibility>,
    current_year: i32,
}

impl ContributionLedger {
    /// Creates an empty ledger whose current year is today's year (UTC).
    #[must_use]
    pub fn new(calculator: EligibilityCalculator) -> Self {
        let ledger = Self {
            calculator,
            store: TransactionStore::new(),
            eligibility: None,
            current_year: Utc::now().year(),
        };
        ledger.warn_if_limits_stale();
        ledger
    }

    /// Pins the year treated as "now".
    #[must_use]
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self.warn_if_limits_stale();
        self
    }

    /// Returns false when the limit table has no row for the current year,
    /// in which case the year's limit counts as zero until one is configured.
    #[must_use]
    pub fn limits_cover_current_year(&self) -> bool {
        self.calculator.limits().covers(self.current_year)
    }

    /// Builds a ledger from configuration.
    ///
    /// Applies limit overrides, the current-year override and, when present,
    /// the profile section. Configured transactions are not replayed here.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` for an inconsistent limit table and
    /// `AppError::Validation` for a negative declared carryover.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let calculator = EligibilityCalculator::from_config(&config.limits)?;
        let mut ledger = Self::new(calculator);
        if let Some(year) = config.current_year {
            ledger = ledger.with_current_year(year);
        }
        if let Some(profile) = &config.profile {
            ledger.configure_eligibility(
                profile.birth_date,
                profile.mode,
                profile.declared_carryover,
            )?;
        }
        Ok(ledger)
    }

    /// Sets (or replaces) the account holder's eligibility inputs.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidCarryover` if a declared carryover is negative.
    pub fn configure_eligibility(
        &mut self,
        birth_date: NaiveDate,
        mode: CarryoverMode,
        declared_carryover: Option<Decimal>,
    ) -> Result<EligibilityProfile, LedgerError> {
        let basis = CarryoverBasis::from_mode(mode, declared_carryover)?;
        let profile = self.calculator.profile(birth_date);
        self.eligibility = Some(Eligibility { profile, basis });

        info!(
            first_eligible_year = profile.first_eligible_year,
            mode = ?mode,
            "Eligibility configured"
        );
        if let Some(warning) = self.eligibility_warning() {
            warn!(%warning, "Account holder is not yet eligible");
        }
        Ok(profile)
    }

    /// Current eligibility settings, if configured.
    #[must_use]
    pub fn eligibility(&self) -> Option<&Eligibility> {
        self.eligibility.as_ref()
    }

    /// `NotYetEligible` when room has not started accruing in the current year.
    ///
    /// Informational only: transactions are not blocked by it.
    #[must_use]
    pub fn eligibility_warning(&self) -> Option<LedgerError> {
        let eligibility = self.eligibility?;
        let first_eligible_year = eligibility.profile.first_eligible_year;
        (first_eligible_year > self.current_year).then_some(LedgerError::NotYetEligible {
            first_eligible_year,
            current_year: self.current_year,
        })
    }

    /// The year treated as "now".
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// The calculator backing this ledger.
    #[must_use]
    pub fn calculator(&self) -> &EligibilityCalculator {
        &self.calculator
    }

    /// Read access to the transaction log.
    #[must_use]
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Accepted dates: January 1 of the inception year through December 31
    /// of the current year.
    #[must_use]
    pub fn date_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let earliest = NaiveDate::from_ymd_opt(self.calculator.inception_year(), 1, 1)?;
        let latest = NaiveDate::from_ymd_opt(self.current_year, 12, 31)?;
        Some((earliest, latest))
    }

    /// Checks a transaction without recording it.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::DateOutOfRange` for dates outside
    /// [`Self::date_window`] and `LedgerError::EligibilityNotConfigured` for
    /// deposits before eligibility is configured.
    pub fn propose_transaction(
        &self,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<ValidationOutcome, LedgerError> {
        self.check_date(date)?;
        let baseline = self.baseline();
        RoomValidator::validate(baseline.as_ref(), &self.store, date, kind, amount)
    }

    /// Validates and records a transaction in one step.
    ///
    /// # Errors
    ///
    /// Returns the rejection as a `LedgerError` (`InvalidAmount`,
    /// `InsufficientRoom`, `InsufficientBalance`) along with any error from
    /// [`Self::propose_transaction`]. The store is untouched on error.
    pub fn commit_transaction(
        &mut self,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        let outcome = self.propose_transaction(date, kind, amount)?;
        if let Err(err) = outcome.into_result() {
            warn!(
                %kind,
                %amount,
                %date,
                checked = %outcome.room_or_balance_checked,
                code = err.error_code(),
                "Transaction rejected"
            );
            return Err(err);
        }

        let id = self.store.add(date, kind, amount)?;
        debug!(%id, %kind, %amount, %date, "Transaction committed");
        Ok(id)
    }

    /// Deletes a transaction; deleting an unknown id does nothing.
    pub fn delete_transaction(&mut self, id: TransactionId) {
        if self.store.remove(id) {
            debug!(%id, "Transaction deleted");
        }
    }

    /// Deletes every transaction. Ids keep increasing afterwards.
    pub fn clear_all(&mut self) {
        let removed = self.store.len();
        self.store.clear();
        debug!(removed, "Transactions cleared");
    }

    /// All transactions in insertion order.
    #[must_use]
    pub fn list_transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    /// Transactions newest first, the order a transaction list displays.
    #[must_use]
    pub fn transactions_newest_first(&self) -> Vec<&Transaction> {
        self.store.sorted_by_date_desc()
    }

    /// Total room for `year` before deposits, using the configured basis.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EligibilityNotConfigured` before eligibility is set.
    pub fn total_room_for(&self, year: i32) -> Result<Decimal, LedgerError> {
        self.baseline()
            .map(|baseline| baseline.total_room_for(year))
            .ok_or(LedgerError::EligibilityNotConfigured)
    }

    /// Month-by-month summary of `year`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EligibilityNotConfigured` before eligibility is
    /// set and `LedgerError::InvalidYear` for unrepresentable years.
    pub fn summarize(&self, year: i32) -> Result<AnnualSummary, LedgerError> {
        let total_room = self.total_room_for(year)?;
        SummaryService::annual_summary(&self.store, year, total_room)
    }

    /// One row per year with activity, ascending.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EligibilityNotConfigured` before eligibility is set.
    pub fn yearly_overview(&self) -> Result<Vec<YearSummary>, LedgerError> {
        let baseline = self.baseline().ok_or(LedgerError::EligibilityNotConfigured)?;
        Ok(self
            .store
            .years()
            .into_iter()
            .map(|year| {
                SummaryService::year_summary(&self.store, year, baseline.total_room_for(year))
            })
            .collect())
    }

    /// Room usage for the current year.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EligibilityNotConfigured` before eligibility is set.
    pub fn current_room_snapshot(&self) -> Result<RoomSnapshot, LedgerError> {
        let total_room = self.total_room_for(self.current_year)?;
        Ok(SummaryService::room_snapshot(
            &self.store,
            self.current_year,
            total_room,
        ))
    }

    fn warn_if_limits_stale(&self) {
        if !self.limits_cover_current_year() {
            warn!(
                current_year = self.current_year,
                last_year = ?self.calculator.limits().last_year(),
                "No contribution limit configured for the current year"
            );
        }
    }

    fn baseline(&self) -> Option<RoomBaseline<'_>> {
        self.eligibility.map(|eligibility| RoomBaseline {
            calculator: &self.calculator,
            profile: eligibility.profile,
            basis: eligibility.basis,
            current_year: self.current_year,
        })
    }

    fn check_date(&self, date: NaiveDate) -> Result<(), LedgerError> {
        let Some((earliest, latest)) = self.date_window() else {
            return Err(LedgerError::InvalidYear(self.current_year));
        };
        if date < earliest || date > latest {
            return Err(LedgerError::DateOutOfRange {
                date,
                earliest,
                latest,
            });
        }
        Ok(())
    }
}

impl Default for ContributionLedger {
    fn default() -> Self {
        Self::new(EligibilityCalculator::default())
    }
}
