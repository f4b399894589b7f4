//! In-memory medication catalog.

use std::sync::{Arc, RwLock};

use theraplan_core::{
    application::{ApplicationError, ports::MedicationCatalog},
    domain::{DomainValidator as validator, Medication, MedicationId},
    error::{TheraplanError, TheraplanResult},
};

use super::poisoned;

/// Thread-safe in-memory catalog. Keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<Medication>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a medication, keyed by code.
    pub fn insert(&self, medication: Medication) -> TheraplanResult<()> {
        validator::validate_medication(&medication).map_err(TheraplanError::Domain)?;

        let mut inner = self.inner.write().map_err(|_| poisoned("catalog"))?;
        match inner.iter_mut().find(|m| m.code == medication.code) {
            Some(existing) => *existing = medication,
            None => inner.push(medication),
        }
        Ok(())
    }

    /// Get the number of medications.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MedicationCatalog for InMemoryCatalog {
    fn get_by_code(&self, id: MedicationId) -> TheraplanResult<Medication> {
        let inner = self.inner.read().map_err(|_| poisoned("catalog"))?;

        inner
            .iter()
            .find(|m| m.code == id)
            .cloned()
            .ok_or_else(|| ApplicationError::UnknownMedication { id }.into())
    }

    fn list_all(&self) -> TheraplanResult<Vec<Medication>> {
        let inner = self.inner.read().map_err(|_| poisoned("catalog"))?;
        Ok(inner.clone())
    }
}
