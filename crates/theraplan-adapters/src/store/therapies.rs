//! In-memory therapy record store.

use std::sync::{Arc, RwLock};

use theraplan_core::{
    application::ports::TherapyStore,
    domain::{PatientId, TherapyId, TherapyRecord},
    error::TheraplanResult,
};

use super::poisoned;

#[derive(Debug, Default)]
struct TherapyTable {
    records: Vec<TherapyRecord>,
    last_id: i32,
}

/// Thread-safe therapy store handing out sequential ids.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTherapyStore {
    inner: Arc<RwLock<TherapyTable>>,
}

impl InMemoryTherapyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TherapyStore for InMemoryTherapyStore {
    fn list(&self, patient: PatientId) -> TheraplanResult<Vec<TherapyRecord>> {
        let inner = self.inner.read().map_err(|_| poisoned("therapy store"))?;
        Ok(inner
            .records
            .iter()
            .filter(|r| r.patient == patient)
            .cloned()
            .collect())
    }

    fn insert(&self, mut record: TherapyRecord) -> TheraplanResult<TherapyRecord> {
        let mut inner = self.inner.write().map_err(|_| poisoned("therapy store"))?;

        if record.id.is_assigned() {
            inner.last_id = inner.last_id.max(record.id.get());
            inner.records.retain(|r| r.id != record.id);
        } else {
            inner.last_id += 1;
            record.id = TherapyId::new(inner.last_id);
        }

        inner.records.push(record.clone());
        Ok(record)
    }

    fn delete_all(&self, patient: PatientId) -> TheraplanResult<usize> {
        let mut inner = self.inner.write().map_err(|_| poisoned("therapy store"))?;
        let before = inner.records.len();
        inner.records.retain(|r| r.patient != patient);
        Ok(before - inner.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use theraplan_core::domain::{MedicationId, start_of_day};

    fn record(patient: i32) -> TherapyRecord {
        let day = start_of_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        TherapyRecord {
            id: TherapyId::UNASSIGNED,
            patient: PatientId::new(patient),
            start: day,
            end: day,
            medication: MedicationId::new(1),
            quantity: 1.0,
            unit: "tab".into(),
            doses_per_day: 1,
            frequency_days: 1,
            note: None,
            notify: false,
            sms: false,
        }
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = InMemoryTherapyStore::new();
        let a = store.insert(record(1)).unwrap();
        let b = store.insert(record(1)).unwrap();
        assert_eq!(a.id, TherapyId::new(1));
        assert_eq!(b.id, TherapyId::new(2));
    }

    #[test]
    fn insert_with_id_replaces() {
        let store = InMemoryTherapyStore::new();
        let stored = store.insert(record(1)).unwrap();
        let mut edited = stored.clone();
        edited.quantity = 3.0;
        store.insert(edited).unwrap();

        let records = store.list(PatientId::new(1)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, 3.0);
    }

    #[test]
    fn delete_all_is_scoped_to_patient() {
        let store = InMemoryTherapyStore::new();
        store.insert(record(1)).unwrap();
        store.insert(record(1)).unwrap();
        store.insert(record(2)).unwrap();

        assert_eq!(store.delete_all(PatientId::new(1)).unwrap(), 2);
        assert!(store.list(PatientId::new(1)).unwrap().is_empty());
        assert_eq!(store.list(PatientId::new(2)).unwrap().len(), 1);
    }
}
