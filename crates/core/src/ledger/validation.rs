//! Room and balance rules for proposed transactions.
//!
//! Deposits are bounded by the room of the year they are dated in; withdrawals
//! are bounded by the lifetime balance. Withdrawn room only comes back the
//! following calendar year, so a withdrawal never lowers the "room used"
//! figure for its own year.

use chrono::{Datelike, NaiveDate};
use roomkeeper_shared::types::{TransactionKind, floor_at_zero};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::store::TransactionStore;
use super::types::{RejectionReason, ValidationOutcome};
use crate::eligibility::{CarryoverBasis, EligibilityCalculator, EligibilityProfile};

/// Everything needed to compute a year's total room.
#[derive(Debug, Clone, Copy)]
pub struct RoomBaseline<'a> {
    /// Limit table and eligibility rules.
    pub calculator: &'a EligibilityCalculator,
    /// The account holder.
    pub profile: EligibilityProfile,
    /// How the carryover into the current year is sourced.
    pub basis: CarryoverBasis,
    /// The year treated as "now".
    pub current_year: i32,
}

impl RoomBaseline<'_> {
    /// Total room for `year` before any deposits.
    ///
    /// In the current year this is carryover plus the year's limit, which in
    /// inferred mode is the room accrued from inception (zero before the
    /// first eligible year). Any other year gets its own limit only: the
    /// historical carryover chain is unknown, so backdated entries are bounded
    /// conservatively.
    #[must_use]
    pub fn total_room_for(&self, year: i32) -> Decimal {
        let limit = self.calculator.limit_for(year);
        if year != self.current_year {
            return limit;
        }
        let carryover = self
            .calculator
            .carryover_for(self.basis, self.profile.birth_date, year);
        floor_at_zero(carryover + limit)
    }
}

/// Stateless accept/reject decisions, evaluated before the store is mutated.
pub struct RoomValidator;

impl RoomValidator {
    /// Room left for deposits dated in `year`, never negative.
    #[must_use]
    pub fn allowed_room(
        baseline: &RoomBaseline<'_>,
        store: &TransactionStore,
        year: i32,
    ) -> Decimal {
        floor_at_zero(baseline.total_room_for(year) - store.deposits_in_year(year))
    }

    /// Balance available for withdrawals, never negative.
    #[must_use]
    pub fn available_balance(store: &TransactionStore) -> Decimal {
        floor_at_zero(store.lifetime_balance())
    }

    /// Checks a deposit against the room of its own year.
    #[must_use]
    pub fn validate_deposit(
        baseline: &RoomBaseline<'_>,
        store: &TransactionStore,
        date: NaiveDate,
        amount: Decimal,
    ) -> ValidationOutcome {
        if amount <= Decimal::ZERO {
            return ValidationOutcome::reject(RejectionReason::InvalidAmount, Decimal::ZERO);
        }

        let allowed_room = Self::allowed_room(baseline, store, date.year());
        if amount <= allowed_room {
            ValidationOutcome::accept(allowed_room)
        } else {
            ValidationOutcome::reject(RejectionReason::InsufficientRoom, allowed_room)
        }
    }

    /// Checks a withdrawal against the lifetime balance, whatever its date.
    #[must_use]
    pub fn validate_withdrawal(store: &TransactionStore, amount: Decimal) -> ValidationOutcome {
        if amount <= Decimal::ZERO {
            return ValidationOutcome::reject(RejectionReason::InvalidAmount, Decimal::ZERO);
        }

        let available = Self::available_balance(store);
        if amount <= available {
            ValidationOutcome::accept(available)
        } else {
            ValidationOutcome::reject(RejectionReason::InsufficientBalance, available)
        }
    }

    /// Checks a proposed transaction of either kind.
    ///
    /// Non-positive amounts are rejected before any room lookup, so they never
    /// require a baseline.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EligibilityNotConfigured` for a deposit when no
    /// baseline is available.
    pub fn validate(
        baseline: Option<&RoomBaseline<'_>>,
        store: &TransactionStore,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<ValidationOutcome, LedgerError> {
        if amount <= Decimal::ZERO {
            return Ok(ValidationOutcome::reject(
                RejectionReason::InvalidAmount,
                Decimal::ZERO,
            ));
        }

        match kind {
            TransactionKind::Deposit => {
                let baseline = baseline.ok_or(LedgerError::EligibilityNotConfigured)?;
                Ok(Self::validate_deposit(baseline, store, date, amount))
            }
            TransactionKind::Withdrawal => Ok(Self::validate_withdrawal(store, amount)),
        }
    }
}
