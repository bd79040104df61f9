//! Summary generation over the transaction log.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use roomkeeper_shared::types::{floor_at_zero, percent_of};
use rust_decimal::Decimal;

use super::types::{AnnualSummary, MonthlySummary, RoomSnapshot, YearSummary};
use crate::ledger::error::LedgerError;
use crate::ledger::store::TransactionStore;

/// Service for generating read-only summaries.
///
/// Everything is recomputed from the full log on each call.
pub struct SummaryService;

impl SummaryService {
    /// Month-by-month rollup of `year` against `total_room`.
    ///
    /// Only months with activity are emitted, in ascending order.
    #[must_use]
    pub fn monthly_summaries(
        store: &TransactionStore,
        year: i32,
        total_room: Decimal,
    ) -> Vec<MonthlySummary> {
        let mut by_month: BTreeMap<u32, (Decimal, Decimal)> = BTreeMap::new();
        for tx in store.in_year(year) {
            let (deposits, withdrawals) = by_month.entry(tx.month()).or_default();
            if tx.is_deposit() {
                *deposits += tx.amount;
            } else {
                *withdrawals += tx.amount;
            }
        }

        let mut cumulative = Decimal::ZERO;
        by_month
            .into_iter()
            .map(|(month, (deposits_total, withdrawals_total))| {
                let net_contribution = deposits_total;
                cumulative += net_contribution;
                MonthlySummary {
                    month,
                    deposits_total,
                    withdrawals_total,
                    net_contribution,
                    cumulative_contribution: cumulative,
                    room_remaining: floor_at_zero(total_room - cumulative),
                }
            })
            .collect()
    }

    /// Full annual summary for `year`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidYear` if `year` is not a representable
    /// calendar year.
    pub fn annual_summary(
        store: &TransactionStore,
        year: i32,
        total_room: Decimal,
    ) -> Result<AnnualSummary, LedgerError> {
        Self::check_year(year)?;

        let months = Self::monthly_summaries(store, year, total_room);
        let deposits_total: Decimal = months.iter().map(|m| m.deposits_total).sum();
        let withdrawals_total: Decimal = months.iter().map(|m| m.withdrawals_total).sum();

        Ok(AnnualSummary {
            year,
            total_room,
            months,
            deposits_total,
            withdrawals_total,
            room_remaining: floor_at_zero(total_room - deposits_total),
        })
    }

    /// Year totals for one row of the overview.
    #[must_use]
    pub fn year_summary(store: &TransactionStore, year: i32, total_room: Decimal) -> YearSummary {
        let deposits_total = store.deposits_in_year(year);
        YearSummary {
            year,
            deposits_total,
            withdrawals_total: store.withdrawals_in_year(year),
            total_room,
            room_remaining: floor_at_zero(total_room - deposits_total),
        }
    }

    /// Room usage for `year`.
    #[must_use]
    pub fn room_snapshot(store: &TransactionStore, year: i32, total_room: Decimal) -> RoomSnapshot {
        let used = store.deposits_in_year(year);
        RoomSnapshot {
            year,
            total_room,
            used,
            remaining: floor_at_zero(total_room - used),
            percent_used: percent_of(used, total_room),
        }
    }

    fn check_year(year: i32) -> Result<(), LedgerError> {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .map(|_| ())
            .ok_or(LedgerError::InvalidYear(year))
    }
}
