//! Therapy Service - record persistence and plan expansion.
//!
//! Plans are never stored: every read expands the stored records again
//! against the current catalog.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{MedicationCatalog, TherapyStore},
    domain::{DomainValidator as validator, PatientId, TherapyPlan, TherapyRecord},
    error::{TheraplanError, TheraplanResult},
};

/// Service for therapy records and their computed plans.
pub struct TherapyService {
    catalog: Box<dyn MedicationCatalog>,
    store: Box<dyn TherapyStore>,
}

impl TherapyService {
    /// Create a new therapy service.
    pub fn new(catalog: Box<dyn MedicationCatalog>, store: Box<dyn TherapyStore>) -> Self {
        Self { catalog, store }
    }

    /// Expand one record into its plan.
    ///
    /// Fails with `UnknownMedication` if the catalog lacks the referenced
    /// medication.
    pub fn plan(&self, record: &TherapyRecord) -> TheraplanResult<TherapyPlan> {
        let medication = self.catalog.get_by_code(record.medication)?;
        TherapyPlan::expand(record, &medication).map_err(TheraplanError::Domain)
    }

    /// Every plan of a patient, in record order.
    ///
    /// The first failing record aborts the whole call.
    #[instrument(skip_all, fields(patient = %patient))]
    pub fn plans(&self, patient: PatientId) -> TheraplanResult<Vec<TherapyPlan>> {
        let records = self.store.list(patient)?;
        debug!(records = records.len(), "Expanding therapy records");

        records.iter().map(|r| self.plan(r)).collect()
    }

    /// Validate and store a new record.
    #[instrument(skip_all, fields(patient = %record.patient, medication = %record.medication))]
    pub fn create(&self, record: TherapyRecord) -> TheraplanResult<TherapyRecord> {
        validator::validate_therapy(&record)?;
        // Unknown medications are rejected up front, not at expansion time.
        self.catalog.get_by_code(record.medication)?;

        let stored = self.store.insert(record)?;
        info!(therapy = %stored.id, "Therapy stored");
        Ok(stored)
    }

    /// Remove every record of a patient.
    #[instrument(skip_all, fields(patient = %patient))]
    pub fn clear(&self, patient: PatientId) -> TheraplanResult<usize> {
        let removed = self.store.delete_all(patient)?;
        info!(removed, "Therapies removed");
        Ok(removed)
    }
}
