//! Property-based tests for room and balance validation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use roomkeeper_shared::types::TransactionKind;
use rust_decimal::Decimal;

use super::store::TransactionStore;
use super::types::RejectionReason;
use super::validation::{RoomBaseline, RoomValidator};
use crate::eligibility::{CarryoverBasis, EligibilityCalculator};

/// Strategy to generate a valid positive amount (0.01 to 20,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..2_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-positive amount (-1,000.00 to 0).
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy to generate a date between 2009 and 2025.
fn ledger_date() -> impl Strategy<Value = NaiveDate> {
    (2009i32..=2025, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy to generate a transaction kind.
fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Deposit),
        Just(TransactionKind::Withdrawal)
    ]
}

/// Strategy to generate a carryover basis.
fn basis_strategy() -> impl Strategy<Value = CarryoverBasis> {
    prop_oneof![
        Just(CarryoverBasis::Inferred),
        (0i64..10_000_000i64).prop_map(|cents| CarryoverBasis::Declared(Decimal::new(cents, 2))),
    ]
}

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 5, 5).unwrap()
}

/// Replays raw transactions into a store without validation.
fn seeded_store(raw: &[(NaiveDate, TransactionKind, Decimal)]) -> TransactionStore {
    let mut store = TransactionStore::new();
    for (date, kind, amount) in raw {
        store.add(*date, *kind, *amount).unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Non-positive amounts are rejected for both kinds.
    #[test]
    fn prop_non_positive_rejected(
        amount in non_positive_amount(),
        kind in kind_strategy(),
        date in ledger_date(),
    ) {
        let calc = EligibilityCalculator::default();
        let baseline = RoomBaseline {
            calculator: &calc,
            profile: calc.profile(birth_date()),
            basis: CarryoverBasis::Inferred,
            current_year: 2025,
        };
        let store = TransactionStore::new();

        let outcome = RoomValidator::validate(Some(&baseline), &store, date, kind, amount).unwrap();
        prop_assert!(!outcome.accepted);
        prop_assert_eq!(outcome.reason, Some(RejectionReason::InvalidAmount));
    }

    /// Bounds are never negative, even when the store already exceeds them.
    #[test]
    fn prop_bounds_never_negative(
        raw in prop::collection::vec((ledger_date(), kind_strategy(), positive_amount()), 0..30),
        basis in basis_strategy(),
        year in 2009i32..=2025,
    ) {
        let calc = EligibilityCalculator::default();
        let baseline = RoomBaseline {
            calculator: &calc,
            profile: calc.profile(birth_date()),
            basis,
            current_year: 2025,
        };
        let store = seeded_store(&raw);

        prop_assert!(RoomValidator::allowed_room(&baseline, &store, year) >= Decimal::ZERO);
        prop_assert!(RoomValidator::available_balance(&store) >= Decimal::ZERO);
    }

    /// Depositing exactly the allowed room is accepted; one cent more is not.
    #[test]
    fn prop_deposit_boundary(
        raw in prop::collection::vec(
            (ledger_date(), Just(TransactionKind::Deposit), positive_amount()),
            0..10,
        ),
        basis in basis_strategy(),
        date in ledger_date(),
    ) {
        let calc = EligibilityCalculator::default();
        let baseline = RoomBaseline {
            calculator: &calc,
            profile: calc.profile(birth_date()),
            basis,
            current_year: 2025,
        };
        let store = seeded_store(&raw);
        let allowed = RoomValidator::allowed_room(&baseline, &store, date.year());

        if allowed > Decimal::ZERO {
            let exact = RoomValidator::validate_deposit(&baseline, &store, date, allowed);
            prop_assert!(exact.accepted);
        }

        let one_cent = Decimal::new(1, 2);
        let over = RoomValidator::validate_deposit(&baseline, &store, date, allowed + one_cent);
        prop_assert!(!over.accepted);
        prop_assert_eq!(over.reason, Some(RejectionReason::InsufficientRoom));
        prop_assert_eq!(over.room_or_balance_checked, allowed);
    }

    /// In inferred mode the current year's room is exactly the room accrued
    /// from inception, which is zero for anyone not yet eligible.
    #[test]
    fn prop_inferred_room_matches_inception_total(
        birth_year in 1985i32..2020,
        month in 1u32..=12,
        amount in positive_amount(),
    ) {
        let calc = EligibilityCalculator::default();
        let birth = NaiveDate::from_ymd_opt(birth_year, month, 1).unwrap();
        let baseline = RoomBaseline {
            calculator: &calc,
            profile: calc.profile(birth),
            basis: CarryoverBasis::Inferred,
            current_year: 2025,
        };
        let store = TransactionStore::new();
        let expected = calc.room_from_inception(birth, 2025);

        prop_assert_eq!(baseline.total_room_for(2025), expected);
        if calc.first_eligible_year(birth) > 2025 {
            prop_assert_eq!(expected, Decimal::ZERO);
            let date = NaiveDate::from_ymd_opt(2025, month, 15).unwrap();
            let outcome = RoomValidator::validate_deposit(&baseline, &store, date, amount);
            prop_assert!(!outcome.accepted);
            prop_assert_eq!(outcome.reason, Some(RejectionReason::InsufficientRoom));
        }
    }

    /// A withdrawal never gives back room in its own year.
    #[test]
    fn prop_withdrawal_never_restores_room(
        deposit in positive_amount(),
        fraction in 1i64..=100,
        basis in basis_strategy(),
    ) {
        let calc = EligibilityCalculator::default();
        let baseline = RoomBaseline {
            calculator: &calc,
            profile: calc.profile(birth_date()),
            basis,
            current_year: 2025,
        };
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut store = TransactionStore::new();
        store.add(date, TransactionKind::Deposit, deposit).unwrap();

        let room_before = RoomValidator::allowed_room(&baseline, &store, 2025);
        let deposits_before = store.deposits_in_year(2025);

        let withdrawal = (deposit * Decimal::from(fraction) / Decimal::ONE_HUNDRED).round_dp(2);
        if withdrawal > Decimal::ZERO {
            let outcome = RoomValidator::validate_withdrawal(&store, withdrawal);
            prop_assert!(outcome.accepted);
            store.add(date, TransactionKind::Withdrawal, withdrawal).unwrap();
        }

        prop_assert_eq!(store.deposits_in_year(2025), deposits_before);
        prop_assert!(RoomValidator::allowed_room(&baseline, &store, 2025) <= room_before);
    }

    /// Ids only ever grow, across removes and clears.
    #[test]
    fn prop_ids_monotonic(ops in prop::collection::vec(0u8..4, 1..60)) {
        let mut store = TransactionStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut issued = Vec::new();

        for op in ops {
            match op {
                0 | 1 => {
                    let id = store.add(date, TransactionKind::Deposit, Decimal::ONE).unwrap();
                    issued.push(id);
                }
                2 => {
                    if let Some(id) = issued.last() {
                        store.remove(*id);
                    }
                }
                _ => store.clear(),
            }
        }

        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }
}
