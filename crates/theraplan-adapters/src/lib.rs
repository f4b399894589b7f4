//! Infrastructure adapters for Theraplan.
//!
//! This crate implements the ports defined in `theraplan-core::application::ports`.
//! It contains every store and all file I/O.

pub mod demo;
pub mod snapshot;
pub mod store;

// Re-export commonly used adapters
pub use demo::demo_snapshot;
pub use snapshot::{Snapshot, SnapshotError, SnapshotFormat, StockEntry, Stores};
pub use store::{
    InMemoryCatalog, InMemoryLocationStock, InMemoryPatientDirectory, InMemoryReminderSink,
    InMemoryTherapyStore,
};
