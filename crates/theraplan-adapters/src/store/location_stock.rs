//! In-memory per-location stock.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use theraplan_core::{
    application::ports::LocationStock,
    domain::{DomainValidator as validator, LocationId, MedicationId},
    error::{TheraplanError, TheraplanResult},
};

use super::poisoned;

/// Thread-safe in-memory stock table, `location -> medication -> quantity`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocationStock {
    inner: Arc<RwLock<BTreeMap<LocationId, BTreeMap<MedicationId, f64>>>>,
}

impl InMemoryLocationStock {
    /// Create a new empty stock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location with no stock.
    pub fn add_location(&self, location: LocationId) -> TheraplanResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("location stock"))?;
        inner.entry(location).or_default();
        Ok(())
    }

    /// Set the current quantity of a medication at a location.
    ///
    /// Negative quantities are kept; NaN and infinities are rejected.
    pub fn set_quantity(
        &self,
        location: LocationId,
        medication: MedicationId,
        quantity: f64,
    ) -> TheraplanResult<()> {
        validator::validate_stock_quantity(quantity).map_err(TheraplanError::Domain)?;

        let mut inner = self.inner.write().map_err(|_| poisoned("location stock"))?;
        inner.entry(location).or_default().insert(medication, quantity);
        Ok(())
    }
}

impl LocationStock for InMemoryLocationStock {
    fn current_quantity(
        &self,
        location: Option<&LocationId>,
        medication: MedicationId,
    ) -> TheraplanResult<f64> {
        let inner = self.inner.read().map_err(|_| poisoned("location stock"))?;

        let quantity = match location {
            Some(location) => inner
                .get(location)
                .and_then(|stock| stock.get(&medication))
                .copied()
                .unwrap_or(0.0),
            None => inner
                .values()
                .filter_map(|stock| stock.get(&medication))
                .sum(),
        };
        Ok(quantity)
    }

    fn locations(&self) -> TheraplanResult<Vec<LocationId>> {
        let inner = self.inner.read().map_err(|_| poisoned("location stock"))?;
        Ok(inner.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theraplan_core::domain::DomainError;

    fn stock() -> InMemoryLocationStock {
        let stock = InMemoryLocationStock::new();
        let med = MedicationId::new(1);
        stock.set_quantity("A".into(), med, 4.0).unwrap();
        stock.set_quantity("B".into(), med, 0.0).unwrap();
        stock.set_quantity("B".into(), MedicationId::new(2), 9.0).unwrap();
        stock
    }

    #[test]
    fn none_sums_every_location() {
        assert_eq!(stock().current_quantity(None, MedicationId::new(1)).unwrap(), 4.0);
        assert_eq!(stock().current_quantity(None, MedicationId::new(2)).unwrap(), 9.0);
    }

    #[test]
    fn unknown_pairs_report_zero() {
        let stock = stock();
        let c = LocationId::from("C");
        assert_eq!(stock.current_quantity(Some(&c), MedicationId::new(1)).unwrap(), 0.0);
        assert_eq!(stock.current_quantity(None, MedicationId::new(3)).unwrap(), 0.0);
    }

    #[test]
    fn non_finite_quantity_is_rejected() {
        let stock = stock();
        let err = stock
            .set_quantity("A".into(), MedicationId::new(1), f64::NAN)
            .unwrap_err();
        assert!(matches!(
            err,
            TheraplanError::Domain(DomainError::InvalidQuantity { .. })
        ));
        assert_eq!(stock.current_quantity(None, MedicationId::new(1)).unwrap(), 4.0);

        stock.set_quantity("A".into(), MedicationId::new(1), -1.0).unwrap();
        assert_eq!(stock.current_quantity(None, MedicationId::new(1)).unwrap(), -1.0);
    }

    #[test]
    fn locations_are_sorted() {
        let stock = stock();
        stock.add_location("0-EMPTY".into()).unwrap();
        let codes: Vec<_> = stock
            .locations()
            .unwrap()
            .into_iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(codes, vec!["0-EMPTY", "A", "B"]);
    }
}
