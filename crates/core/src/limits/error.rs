//! Limit table error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building an annual limit table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitTableError {
    /// The same year appears twice.
    #[error("Duplicate annual limit for year {0}")]
    DuplicateYear(i32),

    /// A limit is below zero.
    #[error("Annual limit for year {year} cannot be negative: {limit}")]
    NegativeLimit {
        /// The offending year.
        year: i32,
        /// The configured limit.
        limit: Decimal,
    },
}

impl LimitTableError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateYear(_) => "DUPLICATE_LIMIT_YEAR",
            Self::NegativeLimit { .. } => "NEGATIVE_LIMIT",
        }
    }
}

impl From<LimitTableError> for roomkeeper_shared::AppError {
    fn from(err: LimitTableError) -> Self {
        Self::Configuration(err.to_string())
    }
}
