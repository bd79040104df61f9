//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain crates keep their own precise error enums and convert into this one
/// at the host boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation (bad amount, bad date, bad year).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (not enough room or balance).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller can fix the problem by changing its input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::BusinessRule(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::BusinessRule(String::new()).error_code(),
            "BUSINESS_RULE_VIOLATION"
        );
        assert_eq!(
            AppError::Configuration(String::new()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_user_errors() {
        assert!(AppError::Validation("amount".into()).is_user_error());
        assert!(AppError::BusinessRule("room".into()).is_user_error());
        assert!(!AppError::Configuration("missing".into()).is_user_error());
        assert!(!AppError::Internal("boom".into()).is_user_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", AppError::Validation("msg".into())),
            "Validation error: msg"
        );
        assert_eq!(
            format!("{}", AppError::BusinessRule("msg".into())),
            "Business rule violation: msg"
        );
        assert_eq!(
            format!("{}", AppError::Configuration("msg".into())),
            "Configuration error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::NotFound("profile".into()).into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
