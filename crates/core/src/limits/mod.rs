//! Annual contribution limits.

pub mod error;
pub mod table;

pub use error::LimitTableError;
pub use table::{AnnualLimit, AnnualLimitTable};
