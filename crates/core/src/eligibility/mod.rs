//! Eligibility windows and room accrual.
//!
//! - When a person starts accruing room
//! - How much room has accrued through a given year
//! - How carryover into the current year is sourced

pub mod calculator;
pub mod types;


pub use calculator::{DEFAULT_INCEPTION_YEAR, DEFAULT_MAJORITY_AGE, EligibilityCalculator};
pub use types::{CarryoverBasis, EligibilityProfile};
