use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::MedicationId};

/// A catalog medication together with its main-store ledger.
///
/// The ledger tracks cumulative movements only; the net quantity held in the
/// main store is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub code: MedicationId,
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Reorder threshold across the main store and every location.
    #[serde(default)]
    pub min_quantity: f64,
    #[serde(default)]
    pub initial_quantity: f64,
    #[serde(default)]
    pub in_quantity: f64,
    #[serde(default)]
    pub out_quantity: f64,
}

impl Medication {
    pub fn new(code: MedicationId, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            kind: String::new(),
            min_quantity: 0.0,
            initial_quantity: 0.0,
            in_quantity: 0.0,
            out_quantity: 0.0,
        }
    }

    pub fn with_ledger(mut self, initial: f64, received: f64, issued: f64) -> Self {
        self.initial_quantity = initial;
        self.in_quantity = received;
        self.out_quantity = issued;
        self
    }

    pub fn with_min_quantity(mut self, min_quantity: f64) -> Self {
        self.min_quantity = min_quantity;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Net quantity in the main store: initial + in − out.
    ///
    /// Negative when more has been issued than recorded as received; that is
    /// a meaningful figure, not an error.
    pub fn main_store_net(&self) -> f64 {
        self.initial_quantity + self.in_quantity - self.out_quantity
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "medication description",
            });
        }
        for (field, quantity) in [
            ("min_quantity", self.min_quantity),
            ("initial_quantity", self.initial_quantity),
            ("in_quantity", self.in_quantity),
            ("out_quantity", self.out_quantity),
        ] {
            if !quantity.is_finite() || quantity < 0.0 {
                return Err(DomainError::InvalidQuantity { field, quantity });
            }
        }
        Ok(())
    }
}
