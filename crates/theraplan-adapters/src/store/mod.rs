//! In-memory port implementations.
//!
//! Every store is a cheap `Clone` handle over shared state, so one store can
//! back several services at once.

mod catalog;
mod location_stock;
mod patients;
mod reminders;
mod therapies;

pub use catalog::InMemoryCatalog;
pub use location_stock::InMemoryLocationStock;
pub use patients::InMemoryPatientDirectory;
pub use reminders::InMemoryReminderSink;
pub use therapies::InMemoryTherapyStore;

use theraplan_core::application::ApplicationError;

fn poisoned(store: &'static str) -> ApplicationError {
    ApplicationError::StoreLockError { store }
}
