//! In-memory patient directory.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use theraplan_core::{
    application::{ApplicationError, ports::PatientDirectory},
    domain::{Patient, PatientId},
    error::TheraplanResult,
};

use super::poisoned;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientDirectory {
    inner: Arc<RwLock<HashMap<PatientId, Patient>>>,
}

impl InMemoryPatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, patient: Patient) -> TheraplanResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("patient directory"))?;
        inner.insert(patient.id, patient);
        Ok(())
    }
}

impl PatientDirectory for InMemoryPatientDirectory {
    fn get_by_id(&self, id: PatientId) -> TheraplanResult<Patient> {
        let inner = self.inner.read().map_err(|_| poisoned("patient directory"))?;
        inner
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::UnknownPatient { id }.into())
    }
}
