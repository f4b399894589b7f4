//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::{MedicationId, PatientId};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A therapy references a medication the catalog does not know.
    #[error("Unknown medication: {id}")]
    UnknownMedication { id: MedicationId },

    /// The patient directory has no such patient.
    #[error("Unknown patient: {id}")]
    UnknownPatient { id: PatientId },

    /// Store access failed (lock poisoned, etc.).
    #[error("Store error: {store}")]
    StoreLockError { store: &'static str },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownMedication { id } => vec![
                format!("No medication with code {} in the catalog", id),
                "Check the therapy record or add the medication to the snapshot".into(),
            ],
            Self::UnknownPatient { id } => vec![
                format!("No patient with id {} in the directory", id),
                "Check the patient id".into(),
            ],
            Self::StoreLockError { store } => vec![
                format!("The {} is locked", store),
                "Try again in a moment".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownMedication { .. } | Self::UnknownPatient { .. } => ErrorCategory::NotFound,
            Self::StoreLockError { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
