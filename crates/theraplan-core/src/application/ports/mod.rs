//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `theraplan-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `MedicationCatalog`: Medications and main-store ledger
//!   - `LocationStock`: Per-location stock views
//!   - `PatientDirectory`: Patient lookups
//!   - `ReminderSink`: Reminder outbox
//!   - `TherapyStore`: Therapy record persistence
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{LocationStock, MedicationCatalog, PatientDirectory, ReminderSink, TherapyStore};

#[cfg(test)]
pub use output::{
    MockLocationStock, MockMedicationCatalog, MockPatientDirectory, MockReminderSink,
    MockTherapyStore,
};
