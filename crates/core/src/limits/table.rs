//! Calendar year to contribution limit lookup.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LimitTableError;

/// One year's contribution limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualLimit {
    /// Calendar year.
    pub year: i32,
    /// Contribution limit for the year.
    pub limit: Decimal,
}

impl AnnualLimit {
    /// Creates a new annual limit row.
    #[must_use]
    pub const fn new(year: i32, limit: Decimal) -> Self {
        Self { year, limit }
    }
}

/// Published limits, in whole dollars, from program inception onward.
const PUBLISHED_LIMITS: &[(i32, i64)] = &[
    (2009, 5_000),
    (2010, 5_000),
    (2011, 5_000),
    (2012, 5_000),
    (2013, 5_500),
    (2014, 5_500),
    (2015, 10_000),
    (2016, 5_500),
    (2017, 5_500),
    (2018, 5_500),
    (2019, 6_000),
    (2020, 6_000),
    (2021, 6_000),
    (2022, 6_000),
    (2023, 6_500),
    (2024, 7_000),
    (2025, 7_000),
    (2026, 7_000),
];

/// Immutable mapping from calendar year to that year's limit.
///
/// Years without an entry (before inception or past the configured horizon)
/// have a limit of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualLimitTable {
    limits: BTreeMap<i32, Decimal>,
}

impl AnnualLimitTable {
    /// Builds a table from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns `LimitTableError::DuplicateYear` if a year repeats and
    /// `LimitTableError::NegativeLimit` if a limit is below zero.
    pub fn new(entries: impl IntoIterator<Item = AnnualLimit>) -> Result<Self, LimitTableError> {
        let mut limits = BTreeMap::new();
        for entry in entries {
            Self::check_limit(entry)?;
            if limits.insert(entry.year, entry.limit).is_some() {
                return Err(LimitTableError::DuplicateYear(entry.year));
            }
        }
        Ok(Self { limits })
    }

    /// Returns the built-in table of published limits.
    #[must_use]
    pub fn published() -> Self {
        let limits = PUBLISHED_LIMITS
            .iter()
            .map(|&(year, dollars)| (year, Decimal::from(dollars)))
            .collect();
        Self { limits }
    }

    /// Returns a copy of this table with rows replaced or appended.
    ///
    /// This is the configuration-update path for publishing a new year's limit.
    ///
    /// # Errors
    ///
    /// Returns `LimitTableError::DuplicateYear` if the overrides repeat a year
    /// and `LimitTableError::NegativeLimit` if an override is below zero.
    pub fn with_overrides(
        &self,
        overrides: impl IntoIterator<Item = AnnualLimit>,
    ) -> Result<Self, LimitTableError> {
        let overrides = Self::new(overrides)?;
        let mut limits = self.limits.clone();
        limits.extend(overrides.limits);
        Ok(Self { limits })
    }

    /// Returns the limit for `year`, or zero when the year is not configured.
    #[must_use]
    pub fn limit_for(&self, year: i32) -> Decimal {
        self.limits.get(&year).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sums the limits for every year in `from..=to`.
    ///
    /// An empty range (`to < from`) sums to zero.
    #[must_use]
    pub fn total_between(&self, from: i32, to: i32) -> Decimal {
        if to < from {
            return Decimal::ZERO;
        }
        self.limits.range(from..=to).map(|(_, limit)| *limit).sum()
    }

    /// First configured year.
    #[must_use]
    pub fn first_year(&self) -> Option<i32> {
        self.limits.keys().next().copied()
    }

    /// Last configured year.
    #[must_use]
    pub fn last_year(&self) -> Option<i32> {
        self.limits.keys().next_back().copied()
    }

    /// Returns true if `year` is on or before the last configured year.
    #[must_use]
    pub fn covers(&self, year: i32) -> bool {
        self.last_year().is_some_and(|last| year <= last)
    }

    /// Iterates over the rows in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = AnnualLimit> + '_ {
        self.limits
            .iter()
            .map(|(&year, &limit)| AnnualLimit::new(year, limit))
    }

    fn check_limit(entry: AnnualLimit) -> Result<(), LimitTableError> {
        if entry.limit < Decimal::ZERO {
            return Err(LimitTableError::NegativeLimit {
                year: entry.year,
                limit: entry.limit,
            });
        }
        Ok(())
    }
}

impl Default for AnnualLimitTable {
    fn default() -> Self {
        Self::published()
    }
}
