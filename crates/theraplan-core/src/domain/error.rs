// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can log and still propagate)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// Period frequency or doses per day below one.
    #[error("Invalid {field} {frequency}: must be at least 1")]
    InvalidFrequency { field: &'static str, frequency: i64 },

    #[error("Invalid date range: {reason}")]
    InvalidDateRange { reason: String },

    #[error("Invalid quantity {quantity} for {field}")]
    InvalidQuantity { field: &'static str, quantity: f64 },

    #[error("Invalid {kind} '{value}': expected a whole number")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Invalid reminder hour {hour}: must be between 0 and 23")]
    InvalidReminderHour { hour: u32 },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Therapy {therapy} references medication {expected} but {actual} was supplied")]
    MedicationMismatch {
        therapy: String,
        expected: String,
        actual: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFrequency {
                field: "doses per day",
                ..
            } => vec!["A therapy must be administered at least once per dosing day".into()],
            Self::InvalidFrequency { .. } => vec![
                "The period frequency is the number of days between dosing cycles".into(),
                "Use 1 for a daily therapy, 7 for a weekly one".into(),
            ],
            Self::InvalidDateRange { reason } => vec![
                "Check the therapy start and end dates".into(),
                format!("Details: {}", reason),
            ],
            Self::InvalidQuantity {
                field: "location stock",
                ..
            } => vec!["Location stock must be a finite number".into()],
            Self::InvalidQuantity { field, .. } => vec![
                format!("'{}' must be a finite, non-negative number", field),
            ],
            Self::InvalidIdentifier { kind, .. } => vec![
                format!("Pass the {kind} as its numeric code, for example 7"),
            ],
            Self::InvalidReminderHour { .. } => vec![
                "Set scheduling.reminder_hour to a value between 0 and 23".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFrequency { .. }
            | Self::InvalidDateRange { .. }
            | Self::InvalidQuantity { .. }
            | Self::InvalidIdentifier { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::InvalidReminderHour { .. } => ErrorCategory::Configuration,
            Self::MedicationMismatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
