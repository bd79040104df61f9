//! Room accrual from the first eligible year onward.

use chrono::{Datelike, NaiveDate};
use roomkeeper_shared::config::LimitsConfig;
use rust_decimal::Decimal;

use super::types::{CarryoverBasis, EligibilityProfile};
use crate::limits::{AnnualLimit, AnnualLimitTable, LimitTableError};

/// First year anyone could accrue room.
pub const DEFAULT_INCEPTION_YEAR: i32 = 2009;

/// Age at which room starts accruing.
pub const DEFAULT_MAJORITY_AGE: i32 = 18;

/// Derives eligibility windows and accrued room from the limit table.
#[derive(Debug, Clone)]
pub struct EligibilityCalculator {
    limits: AnnualLimitTable,
    inception_year: i32,
    majority_age: i32,
}

impl EligibilityCalculator {
    /// Creates a calculator over `limits` with the default inception year and age.
    #[must_use]
    pub fn new(limits: AnnualLimitTable) -> Self {
        Self {
            limits,
            inception_year: DEFAULT_INCEPTION_YEAR,
            majority_age: DEFAULT_MAJORITY_AGE,
        }
    }

    /// Overrides the program inception year.
    #[must_use]
    pub fn with_inception_year(mut self, inception_year: i32) -> Self {
        self.inception_year = inception_year;
        self
    }

    /// Overrides the age at which room starts accruing.
    #[must_use]
    pub fn with_majority_age(mut self, majority_age: i32) -> Self {
        self.majority_age = majority_age;
        self
    }

    /// Builds a calculator from configuration, merging overrides over the
    /// published table.
    ///
    /// # Errors
    ///
    /// Returns a `LimitTableError` if the overrides are inconsistent.
    pub fn from_config(config: &LimitsConfig) -> Result<Self, LimitTableError> {
        let limits = AnnualLimitTable::published().with_overrides(
            config
                .overrides
                .iter()
                .map(|o| AnnualLimit::new(o.year, o.limit)),
        )?;

        Ok(Self::new(limits)
            .with_inception_year(config.inception_year)
            .with_majority_age(config.majority_age))
    }

    /// The limit table backing this calculator.
    #[must_use]
    pub fn limits(&self) -> &AnnualLimitTable {
        &self.limits
    }

    /// The program inception year.
    #[must_use]
    pub fn inception_year(&self) -> i32 {
        self.inception_year
    }

    /// Returns `limit_for(year)` from the backing table.
    #[must_use]
    pub fn limit_for(&self, year: i32) -> Decimal {
        self.limits.limit_for(year)
    }

    /// `max(birth year + majority age, inception year)`.
    ///
    /// A result in the future is valid; the person is simply not eligible yet.
    #[must_use]
    pub fn first_eligible_year(&self, birth_date: NaiveDate) -> i32 {
        (birth_date.year() + self.majority_age).max(self.inception_year)
    }

    /// Builds the eligibility profile for a birth date.
    #[must_use]
    pub fn profile(&self, birth_date: NaiveDate) -> EligibilityProfile {
        EligibilityProfile {
            birth_date,
            first_eligible_year: self.first_eligible_year(birth_date),
        }
    }

    /// Sums every limit from the first eligible year through `through_year`.
    ///
    /// Zero when `through_year` is before the first eligible year.
    #[must_use]
    pub fn room_from_inception(&self, birth_date: NaiveDate, through_year: i32) -> Decimal {
        self.limits
            .total_between(self.first_eligible_year(birth_date), through_year)
    }

    /// Room accumulated before `target_year` assuming no contributions ever:
    /// `room_from_inception(target_year) - limit_for(target_year)`.
    ///
    /// Negative before the first eligible year, so that adding the target
    /// year's limit back always yields `room_from_inception`. Only meaningful
    /// for [`CarryoverBasis::Inferred`].
    #[must_use]
    pub fn carryover_prior_to(&self, birth_date: NaiveDate, target_year: i32) -> Decimal {
        self.room_from_inception(birth_date, target_year) - self.limit_for(target_year)
    }

    /// Carryover into `target_year` under the given basis.
    #[must_use]
    pub fn carryover_for(
        &self,
        basis: CarryoverBasis,
        birth_date: NaiveDate,
        target_year: i32,
    ) -> Decimal {
        match basis {
            CarryoverBasis::Inferred => self.carryover_prior_to(birth_date, target_year),
            CarryoverBasis::Declared(carryover) => carryover,
        }
    }
}

impl Default for EligibilityCalculator {
    fn default() -> Self {
        Self::new(AnnualLimitTable::published())
    }
}
