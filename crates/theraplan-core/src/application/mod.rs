//! Application layer for Theraplan.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (therapy plans, stock, shortages, reminders)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ReminderService, ShortageService, StockLevel, StockService, TherapyService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{LocationStock, MedicationCatalog, PatientDirectory, ReminderSink, TherapyStore};

pub use error::ApplicationError;
