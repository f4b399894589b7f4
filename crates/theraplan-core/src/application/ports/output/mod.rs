//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `theraplan-adapters` crate provides implementations.

use crate::domain::{
    LocationId, Medication, MedicationId, Patient, PatientId, Reminder, TherapyRecord,
};
use crate::error::TheraplanResult;

/// Port for the medication catalog and its main-store ledger.
///
/// Implemented by:
/// - `theraplan_adapters::InMemoryCatalog`
#[cfg_attr(test, mockall::automock)]
pub trait MedicationCatalog: Send + Sync {
    /// Fetch one medication. Fails with `UnknownMedication` when absent.
    fn get_by_code(&self, id: MedicationId) -> TheraplanResult<Medication>;

    /// Every medication, in catalog order.
    fn list_all(&self) -> TheraplanResult<Vec<Medication>>;
}

/// Port for per-location stock views.
///
/// Implemented by:
/// - `theraplan_adapters::InMemoryLocationStock`
#[cfg_attr(test, mockall::automock)]
pub trait LocationStock: Send + Sync {
    /// Current quantity of `medication` held at `location`, or across every
    /// location when `location` is `None`. Unknown pairs report zero.
    fn current_quantity<'a>(
        &self,
        location: Option<&'a LocationId>,
        medication: MedicationId,
    ) -> TheraplanResult<f64>;

    /// Every known storage location.
    fn locations(&self) -> TheraplanResult<Vec<LocationId>>;
}

/// Port for patient lookups.
#[cfg_attr(test, mockall::automock)]
pub trait PatientDirectory: Send + Sync {
    /// Fails with `UnknownPatient` when absent.
    fn get_by_id(&self, id: PatientId) -> TheraplanResult<Patient>;
}

/// Port for the reminder outbox.
///
/// ## Design Notes
///
/// - `replace_for_module` must purge and insert as one unit, so two
///   concurrent edits for the same owner cannot interleave.
/// - Purged reminders move to `Cancelled`; transport moves them to `Sent`.
#[cfg_attr(test, mockall::automock)]
pub trait ReminderSink: Send + Sync {
    /// Cancel every pending reminder of `module`/`module_id`. Returns how
    /// many were cancelled.
    fn delete_all_for_module(&self, module: &str, module_id: &str) -> TheraplanResult<usize>;

    /// Store one reminder.
    fn save(&self, reminder: Reminder) -> TheraplanResult<()>;

    /// Pending reminders of `module`/`module_id`, ordered by schedule time.
    fn pending_for_module(&self, module: &str, module_id: &str) -> TheraplanResult<Vec<Reminder>>;

    /// Atomically cancel the pending reminders of `module`/`module_id` and
    /// store `reminders`. Returns how many were cancelled.
    fn replace_for_module(
        &self,
        module: &str,
        module_id: &str,
        reminders: Vec<Reminder>,
    ) -> TheraplanResult<usize>;
}

/// Port for persisted therapy records.
#[cfg_attr(test, mockall::automock)]
pub trait TherapyStore: Send + Sync {
    /// Records of one patient, in insertion order.
    fn list(&self, patient: PatientId) -> TheraplanResult<Vec<TherapyRecord>>;

    /// Store a record, assigning an id when it has none.
    fn insert(&self, record: TherapyRecord) -> TheraplanResult<TherapyRecord>;

    /// Remove every record of one patient. Returns how many were removed.
    fn delete_all(&self, patient: PatientId) -> TheraplanResult<usize>;
}
