//! Property-based tests for the contribution ledger facade.

use chrono::NaiveDate;
use proptest::prelude::*;
use roomkeeper_shared::types::{CarryoverMode, TransactionKind};
use rust_decimal::Decimal;

use super::service::ContributionLedger;

fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..2_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000i64..2_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Deposit),
        Just(TransactionKind::Withdrawal)
    ]
}

fn in_window_date() -> impl Strategy<Value = NaiveDate> {
    (2009i32..=2025, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn configured_ledger(carryover: Decimal) -> ContributionLedger {
    let mut ledger = ContributionLedger::default().with_current_year(2025);
    ledger
        .configure_eligibility(
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            CarryoverMode::Declared,
            Some(carryover),
        )
        .unwrap();
    ledger
}

proptest! {
    /// Whatever gets committed, room and balance never go negative and
    /// every committed deposit fit the room of its year.
    #[test]
    fn prop_committed_log_respects_bounds(
        carryover in positive_amount(),
        proposals in prop::collection::vec((in_window_date(), kind(), any_amount()), 1..60),
    ) {
        let mut ledger = configured_ledger(carryover);

        for (date, kind, amount) in proposals {
            let outcome = ledger.propose_transaction(date, kind, amount).unwrap();
            let committed = ledger.commit_transaction(date, kind, amount);
            prop_assert_eq!(outcome.accepted, committed.is_ok());
        }

        prop_assert!(ledger.store().lifetime_balance() >= Decimal::ZERO);
        for year in ledger.store().years() {
            let total_room = ledger.total_room_for(year).unwrap();
            prop_assert!(ledger.store().deposits_in_year(year) <= total_room);
        }
        prop_assert!(ledger.current_room_snapshot().unwrap().remaining >= Decimal::ZERO);
    }

    /// Rejected commits leave the log untouched.
    #[test]
    fn prop_rejection_does_not_mutate(
        carryover in positive_amount(),
        date in in_window_date(),
        kind in kind(),
        amount in any_amount(),
    ) {
        let mut ledger = configured_ledger(carryover);
        ledger
            .commit_transaction(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                TransactionKind::Deposit,
                Decimal::ONE,
            )
            .unwrap();
        let before = ledger.list_transactions().to_vec();

        if ledger.commit_transaction(date, kind, amount).is_err() {
            prop_assert_eq!(ledger.list_transactions(), before.as_slice());
        }
    }

    /// Clearing is idempotent and ids keep increasing across clears.
    #[test]
    fn prop_clear_idempotent_ids_monotonic(
        rounds in prop::collection::vec(1usize..5, 1..6),
    ) {
        let mut ledger = configured_ledger(Decimal::new(1_000_000, 0));
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut last = None;

        for count in rounds {
            for _ in 0..count {
                let id = ledger
                    .commit_transaction(date, TransactionKind::Deposit, Decimal::ONE)
                    .unwrap();
                if let Some(prev) = last {
                    prop_assert!(id > prev);
                }
                last = Some(id);
            }
            ledger.clear_all();
            ledger.clear_all();
            prop_assert!(ledger.list_transactions().is_empty());
        }
    }
}
