//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Activity and remaining room for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar month (1-12).
    pub month: u32,
    /// Sum of deposits in the month.
    pub deposits_total: Decimal,
    /// Sum of withdrawals in the month.
    pub withdrawals_total: Decimal,
    /// Contribution counted against room; withdrawals never reduce it.
    pub net_contribution: Decimal,
    /// Running contribution from January through this month.
    pub cumulative_contribution: Decimal,
    /// Room left after this month, never negative.
    pub room_remaining: Decimal,
}

/// Month-by-month rollup for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSummary {
    /// Calendar year.
    pub year: i32,
    /// Total room for the year before any deposits.
    pub total_room: Decimal,
    /// Months with activity, in chronological order.
    pub months: Vec<MonthlySummary>,
    /// Sum of deposits in the year.
    pub deposits_total: Decimal,
    /// Sum of withdrawals in the year.
    pub withdrawals_total: Decimal,
    /// Room left at year end, never negative.
    pub room_remaining: Decimal,
}

/// One row of the year-by-year overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Calendar year.
    pub year: i32,
    /// Sum of deposits in the year.
    pub deposits_total: Decimal,
    /// Sum of withdrawals in the year.
    pub withdrawals_total: Decimal,
    /// Total room for the year before any deposits.
    pub total_room: Decimal,
    /// Room left at year end, never negative.
    pub room_remaining: Decimal,
}

/// Room usage for the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// The year the snapshot describes.
    pub year: i32,
    /// Carryover plus the year's limit.
    pub total_room: Decimal,
    /// Deposits made this year.
    pub used: Decimal,
    /// Room left, never negative.
    pub remaining: Decimal,
    /// `used / total_room * 100`, rounded to 2 places; zero when there is no room.
    pub percent_used: Decimal,
}
