// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Theraplan.
//!
//! This module contains pure business logic. All store access and message
//! transport is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No store, network, or clock access
//! - **Explicit time**: every "now" is a parameter
//! - **Rich domain model**: Behavior lives in entities and pure functions
//!
// Public API - what the world sees
pub mod demand;
pub mod entities;
pub mod error;
pub mod notification;
pub mod schedule;
pub mod shortage;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use demand::{Demand, project_demand};
pub use entities::{Medication, Patient, Reminder, ReminderStatus, TherapyPlan, TherapyRecord};
pub use error::{DomainError, ErrorCategory};
pub use notification::{
    DEFAULT_REMINDER_HOUR, DEFAULT_SMS_MAX_LENGTH, ReminderPolicy, THERAPY_MODULE, reminder_body,
    truncate_chars,
};
pub use schedule::{dosing_dates, end_of_day, start_of_day, truncate_to_seconds};
pub use shortage::{Shortage, evaluate_shortages};
pub use value_objects::{LocationId, LocationScope, MedicationId, PatientId, TherapyId};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(m: u32, d: u32) -> NaiveDateTime {
        start_of_day(NaiveDate::from_ymd_opt(2024, m, d).unwrap())
    }

    // ========================================================================
    // Pipeline: record -> plan -> demand -> shortage
    // ========================================================================

    fn record(med: i32, qty: f64) -> TherapyRecord {
        TherapyRecord {
            id: TherapyId::new(1),
            patient: PatientId::new(1),
            start: day(1, 1),
            end: day(1, 10),
            medication: MedicationId::new(med),
            quantity: qty,
            unit: "tab".into(),
            doses_per_day: 3,
            frequency_days: 3,
            note: None,
            notify: false,
            sms: false,
        }
    }

    #[test]
    fn pipeline_flags_shortage_only_above_stock() {
        let med = Medication::new(MedicationId::new(5), "Paracetamol").with_ledger(10.0, 5.0, 3.0);
        let location_total = 4.0;
        let available = |_| Ok::<_, ()>(med.main_store_net() + location_total);

        let plan = TherapyPlan::expand(&record(5, 2.0), &med).unwrap();
        let demand = project_demand(std::slice::from_ref(&plan), day(1, 7));
        assert_eq!(demand[0].needed, 12.0);
        assert!(evaluate_shortages(&demand, available).unwrap().is_empty());

        // 17 > 16 flips it
        let mut demand = demand;
        demand[0].needed = 17.0;
        let shortages = evaluate_shortages(&demand, available).unwrap();
        assert_eq!(shortages.len(), 1);
        assert_eq!(shortages[0].available, 16.0);
    }

    #[test]
    fn validator_delegates_to_entities() {
        let mut rec = record(5, 2.0);
        assert!(DomainValidator::validate_therapy(&rec).is_ok());
        rec.frequency_days = 0;
        assert_eq!(
            DomainValidator::validate_therapy(&rec),
            Err(DomainError::InvalidFrequency { field: "period frequency", frequency: 0 })
        );
        let med = Medication::new(MedicationId::new(5), " ");
        assert!(DomainValidator::validate_medication(&med).is_err());
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            DomainError::InvalidFrequency { field: "period frequency", frequency: 0 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::InvalidReminderHour { hour: 30 }.category(),
            ErrorCategory::Configuration
        );
        assert!(!DomainError::InvalidFrequency { field: "period frequency", frequency: 0 }
            .suggestions()
            .is_empty());
    }
}
