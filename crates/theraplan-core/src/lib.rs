//! Theraplan Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for therapy
//! scheduling and medication stock-sufficiency projection, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         theraplan-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (TherapyService, StockService,         │
//! │   ShortageService, ReminderService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Catalog, LocationStock, Patients,      │
//! │  ReminderSink, TherapyStore)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   theraplan-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (date sequence, stock, demand,          │
//! │  shortage, reminder formatting)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use theraplan_core::{
//!     application::{ShortageService, StockService, TherapyService},
//!     domain::{PatientId, start_of_day},
//! };
//! # use theraplan_core::prelude::*;
//! # fn catalog() -> Box<dyn MedicationCatalog> { unimplemented!() }
//! # fn therapies() -> Box<dyn TherapyStore> { unimplemented!() }
//! # fn stock() -> Box<dyn LocationStock> { unimplemented!() }
//!
//! // Adapters are injected; see `theraplan-adapters`.
//! let service = ShortageService::new(
//!     TherapyService::new(catalog(), therapies()),
//!     StockService::new(catalog(), stock()),
//! );
//! let as_of = start_of_day(chrono::Local::now().date_naive());
//! let shortages = service.shortages(PatientId::new(1), as_of).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ReminderService, ShortageService, StockService, TherapyService,
        ports::{LocationStock, MedicationCatalog, PatientDirectory, ReminderSink, TherapyStore},
    };
    pub use crate::domain::{
        LocationId, LocationScope, Medication, MedicationId, Patient, PatientId, Reminder,
        ReminderStatus, Shortage, TherapyId, TherapyPlan, TherapyRecord,
    };
    pub use crate::error::{TheraplanError, TheraplanResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
