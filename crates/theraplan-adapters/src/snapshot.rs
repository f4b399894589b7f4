//! Snapshot loader.
//!
//! A snapshot is a point-in-time export of everything the therapy core reads:
//! the medication catalog with its ledger, per-location stock, patients and
//! therapy records. It is loaded into the in-memory stores.
//!
//! # TOML format
//!
//! ```toml
//! locations = ["WARD-B"]            # optional: locations without stock
//!
//! [[medications]]
//! code             = 1
//! description      = "Amoxicillin 500mg"
//! type             = "antibiotic"  # optional
//! min_quantity     = 20             # optional, default 0
//! initial_quantity = 10
//! in_quantity      = 5
//! out_quantity     = 3
//!
//! [[stock]]
//! location   = "WARD-A"
//! medication = 1
//! quantity   = 4
//!
//! [[patients]]
//! id    = 7
//! name  = "Jane Doe"
//! phone = "+15550100"               # optional
//!
//! [[therapies]]
//! patient        = 7
//! medication     = 1
//! start          = "2024-01-01T08:00:00"   # quoted, ISO 8601 local time
//! end            = "2024-01-10T08:00:00"
//! quantity       = 2
//! unit           = "tab"
//! doses_per_day  = 3
//! frequency_days = 3
//! note           = "after meals"    # optional
//! sms            = true             # optional, default false
//! notify         = true             # optional, default false
//! ```
//!
//! The same structure is accepted as JSON when the file ends in `.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use theraplan_core::{
    application::ports::TherapyStore,
    domain::{LocationId, Medication, MedicationId, Patient, TherapyRecord},
    error::TheraplanError,
};

use crate::store::{
    InMemoryCatalog, InMemoryLocationStock, InMemoryPatientDirectory, InMemoryReminderSink,
    InMemoryTherapyStore,
};

/// Failures while reading or applying a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML snapshot: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported snapshot format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("Snapshot rejected: {0}")]
    Rejected(#[from] TheraplanError),
}

impl From<SnapshotError> for TheraplanError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Rejected(inner) => inner,
            other => TheraplanError::Configuration {
                message: other.to_string(),
            },
        }
    }
}

/// Serialisation format of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Toml,
    Json,
}

impl SnapshotFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(SnapshotError::UnsupportedFormat { extension }),
        }
    }
}

/// One `[[stock]]` row: quantity of a medication held at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub location: LocationId,
    pub medication: MedicationId,
    pub quantity: f64,
}

/// Deserialised snapshot file. See the module docs for the format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub locations: Vec<LocationId>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub stock: Vec<StockEntry>,
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub therapies: Vec<TherapyRecord>,
}

/// The in-memory stores a snapshot was loaded into.
///
/// Each field is a shared handle; clone it to hand the same store to
/// several services.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub catalog: InMemoryCatalog,
    pub stock: InMemoryLocationStock,
    pub patients: InMemoryPatientDirectory,
    pub therapies: InMemoryTherapyStore,
    pub reminders: InMemoryReminderSink,
}

impl Snapshot {
    /// Read and parse a snapshot file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let format = SnapshotFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, format)
    }

    /// Parse snapshot text.
    pub fn parse(text: &str, format: SnapshotFormat) -> Result<Self, SnapshotError> {
        let snapshot: Self = match format {
            SnapshotFormat::Toml => toml::from_str(text)?,
            SnapshotFormat::Json => serde_json::from_str(text)?,
        };
        debug!(
            medications = snapshot.medications.len(),
            patients = snapshot.patients.len(),
            therapies = snapshot.therapies.len(),
            "Snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Load everything into fresh in-memory stores.
    ///
    /// Medications are validated on insert; therapy records are stored as
    /// they are and checked when they get expanded.
    pub fn into_stores(self) -> Result<Stores, SnapshotError> {
        let stores = Stores::default();

        for medication in self.medications {
            stores.catalog.insert(medication)?;
        }
        for location in self.locations {
            stores.stock.add_location(location)?;
        }
        for entry in self.stock {
            stores
                .stock
                .set_quantity(entry.location, entry.medication, entry.quantity)?;
        }
        for patient in self.patients {
            stores.patients.insert(patient)?;
        }
        for therapy in self.therapies {
            stores.therapies.insert(therapy)?;
        }

        Ok(stores)
    }
}
