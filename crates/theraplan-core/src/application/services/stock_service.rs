//! Stock Service - available quantity across the main store and locations.
//!
//! Ledger and location views are read independently and without a shared
//! lock, so a figure is a best-effort point-in-time snapshot.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::{LocationStock, MedicationCatalog},
    domain::{LocationScope, Medication, MedicationId},
    error::TheraplanResult,
};

/// Available quantity of a medication next to its reorder threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub medication: MedicationId,
    pub description: String,
    pub available: f64,
    pub min_quantity: f64,
}

/// Service for stock read-outs.
pub struct StockService {
    catalog: Box<dyn MedicationCatalog>,
    stock: Box<dyn LocationStock>,
}

impl StockService {
    /// Create a new stock service.
    pub fn new(catalog: Box<dyn MedicationCatalog>, stock: Box<dyn LocationStock>) -> Self {
        Self { catalog, stock }
    }

    /// Main-store net plus the stock held in `scope`.
    ///
    /// The figure is not clamped: a negative value means more was issued
    /// than recorded as received.
    #[instrument(skip_all, fields(medication = %medication, scope = %scope))]
    pub fn available_quantity(
        &self,
        medication: MedicationId,
        scope: &LocationScope,
    ) -> TheraplanResult<f64> {
        let ledger = self.catalog.get_by_code(medication)?;
        self.available_for(&ledger, scope)
    }

    /// Catalog medications whose available quantity is strictly below their
    /// minimum threshold, in catalog order.
    #[instrument(skip_all, fields(scope = %scope))]
    pub fn below_minimum(&self, scope: &LocationScope) -> TheraplanResult<Vec<StockLevel>> {
        let mut low = Vec::new();
        for medication in self.catalog.list_all()? {
            let available = self.available_for(&medication, scope)?;
            if available < medication.min_quantity {
                low.push(StockLevel {
                    medication: medication.code,
                    description: medication.description,
                    available,
                    min_quantity: medication.min_quantity,
                });
            }
        }
        debug!(count = low.len(), "Medications below minimum");
        Ok(low)
    }

    fn available_for(&self, ledger: &Medication, scope: &LocationScope) -> TheraplanResult<f64> {
        let main_store = ledger.main_store_net();
        let locations = self.stock.current_quantity(scope.location(), ledger.code)?;
        debug!(main_store, locations, "Stock aggregated");
        Ok(main_store + locations)
    }
}
