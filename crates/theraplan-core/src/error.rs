//! Unified error handling for Theraplan Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Theraplan Core operations.
///
/// Every error aborts the whole call; services never return a partial
/// projection alongside an error.
#[derive(Debug, Error, Clone)]
pub enum TheraplanError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TheraplanError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Theraplan".into(),
                "Please report this issue at: https://github.com/cosecruz/theraplan/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StoreLockError { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type TheraplanResult<T> = Result<T, TheraplanError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> TheraplanResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> TheraplanResult<T> {
        self.map_err(|e| TheraplanError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PatientId;

    #[test]
    fn unknown_patient_is_not_found() {
        let err: TheraplanError = ApplicationError::UnknownPatient {
            id: PatientId::new(4),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("Unknown patient: 4"));
    }

    #[test]
    fn lock_errors_are_retryable() {
        let err: TheraplanError = ApplicationError::StoreLockError { store: "catalog" }.into();
        assert!(err.is_retryable());
        let err: TheraplanError = DomainError::InvalidFrequency { field: "period frequency", frequency: 0 }.into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let parsed: Result<i32, std::num::ParseIntError> = "x".parse();
        let err = parsed.context("reading dose").unwrap_err();
        assert!(matches!(err, TheraplanError::Internal { .. }));
        assert!(err.to_string().contains("reading dose"));
    }
}
