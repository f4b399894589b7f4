//! Therapy records (persisted) and therapy plans (computed).
//!
//! A [`TherapyRecord`] is the compact form a clinician edits. A
//! [`TherapyPlan`] is recomputed from it on every read and is never stored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::medication::Medication,
    error::DomainError,
    schedule::{dosing_dates, truncate_to_seconds},
    value_objects::{MedicationId, PatientId, TherapyId},
};

/// Persisted therapy: dose parameters plus a sparse recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyRecord {
    #[serde(default)]
    pub id: TherapyId,
    pub patient: PatientId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub medication: MedicationId,
    /// Quantity administered per dose, in `unit`.
    pub quantity: f64,
    pub unit: String,
    pub doses_per_day: i32,
    /// Days between two dosing cycles.
    pub frequency_days: i32,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub notify: bool,
    #[serde(default)]
    pub sms: bool,
}

impl TherapyRecord {
    /// Check the record invariants. Frequencies are checked first since they
    /// guard the calendar expansion.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.frequency_days <= 0 {
            return Err(DomainError::InvalidFrequency {
                field: "period frequency",
                frequency: i64::from(self.frequency_days),
            });
        }
        if self.doses_per_day <= 0 {
            return Err(DomainError::InvalidFrequency {
                field: "doses per day",
                frequency: i64::from(self.doses_per_day),
            });
        }
        if self.start > self.end {
            return Err(DomainError::InvalidDateRange {
                reason: format!("start {} is after end {}", self.start, self.end),
            });
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(DomainError::InvalidQuantity {
                field: "quantity",
                quantity: self.quantity,
            });
        }
        if self.unit.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "dose unit" });
        }
        Ok(())
    }

    /// The note, if it carries any text.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Computed view of a therapy: the explicit dosing calendar plus the dose
/// parameters and the resolved medication.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TherapyPlan {
    pub id: TherapyId,
    pub patient: PatientId,
    /// Ascending, without duplicates.
    pub dates: Vec<NaiveDateTime>,
    pub medication: Medication,
    pub quantity: f64,
    pub unit: String,
    pub doses_per_day: i32,
    pub note: Option<String>,
    pub notify: bool,
    pub sms: bool,
}

impl TherapyPlan {
    /// Expand a stored record into its plan.
    ///
    /// Pure: no clock, no store access. The caller resolves `medication`
    /// from the catalog; it must be the one the record references.
    pub fn expand(record: &TherapyRecord, medication: &Medication) -> Result<Self, DomainError> {
        record.validate()?;

        if record.medication != medication.code {
            return Err(DomainError::MedicationMismatch {
                therapy: record.id.to_string(),
                expected: record.medication.to_string(),
                actual: medication.code.to_string(),
            });
        }

        let mut dates = dosing_dates(
            truncate_to_seconds(record.start),
            truncate_to_seconds(record.end),
            i64::from(record.frequency_days),
        )?;
        dates.dedup();

        Ok(Self {
            id: record.id,
            patient: record.patient,
            dates,
            medication: medication.clone(),
            quantity: record.quantity,
            unit: record.unit.clone(),
            doses_per_day: record.doses_per_day,
            note: record.note().map(str::to_owned),
            notify: record.notify,
            sms: record.sms,
        })
    }

    pub fn medication_id(&self) -> MedicationId {
        self.medication.code
    }

    /// Number of administration dates at or after `as_of`.
    pub fn remaining_dates(&self, as_of: NaiveDateTime) -> usize {
        // `dates` is ascending, so everything after the partition point counts.
        self.dates.len() - self.dates.partition_point(|d| *d < as_of)
    }

    /// Quantity consumed on a single dosing day.
    pub fn daily_quantity(&self) -> f64 {
        self.quantity * f64::from(self.doses_per_day)
    }
}
