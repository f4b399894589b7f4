//! Shortage Service - projected demand versus available stock.

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use crate::{
    application::services::{StockService, TherapyService},
    domain::{
        Demand, LocationScope, PatientId, Shortage, TherapyPlan, evaluate_shortages,
        project_demand,
    },
    error::TheraplanResult,
};

/// Service projecting a patient's remaining demand against stock.
pub struct ShortageService {
    therapies: TherapyService,
    stock: StockService,
}

impl ShortageService {
    /// Create a new shortage service from the services it reads through.
    pub fn new(therapies: TherapyService, stock: StockService) -> Self {
        Self { therapies, stock }
    }

    /// Remaining demand per medication for a patient.
    #[instrument(skip_all, fields(patient = %patient, as_of = %as_of))]
    pub fn demand(&self, patient: PatientId, as_of: NaiveDateTime) -> TheraplanResult<Vec<Demand>> {
        let plans = self.therapies.plans(patient)?;
        Ok(project_demand(&plans, as_of))
    }

    /// Medications a patient's remaining therapies would run out of.
    #[instrument(skip_all, fields(patient = %patient, as_of = %as_of))]
    pub fn shortages(
        &self,
        patient: PatientId,
        as_of: NaiveDateTime,
    ) -> TheraplanResult<Vec<Shortage>> {
        let plans = self.therapies.plans(patient)?;
        self.shortages_for_plans(&plans, as_of)
    }

    /// Shortages for an already expanded set of plans.
    ///
    /// Stock is always aggregated over every location.
    pub fn shortages_for_plans(
        &self,
        plans: &[TherapyPlan],
        as_of: NaiveDateTime,
    ) -> TheraplanResult<Vec<Shortage>> {
        let demand = project_demand(plans, as_of);
        let shortages = evaluate_shortages(&demand, |medication| {
            self.stock
                .available_quantity(medication, &LocationScope::All)
        })?;

        info!(
            medications = demand.len(),
            shortages = shortages.len(),
            "Shortage projection done"
        );
        Ok(shortages)
    }

    /// The therapy service this projection reads plans through.
    pub fn therapies(&self) -> &TherapyService {
        &self.therapies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{MockLocationStock, MockMedicationCatalog, MockTherapyStore},
        domain::{Medication, MedicationId, TherapyId, TherapyRecord, start_of_day},
    };
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        start_of_day(NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
    }

    fn record(id: i32, med: i32, quantity: f64) -> TherapyRecord {
        TherapyRecord {
            id: TherapyId::new(id),
            patient: PatientId::new(1),
            start: day(1),
            end: day(10),
            medication: MedicationId::new(med),
            quantity,
            unit: "tab".into(),
            doses_per_day: 3,
            frequency_days: 3,
            note: None,
            notify: false,
            sms: false,
        }
    }

    fn catalog() -> MockMedicationCatalog {
        let mut catalog = MockMedicationCatalog::new();
        catalog.expect_get_by_code().returning(|id| {
            Ok(Medication::new(id, format!("Med {id}")).with_ledger(10.0, 5.0, 3.0))
        });
        catalog
    }

    fn location_stock() -> MockLocationStock {
        let mut stock = MockLocationStock::new();
        stock.expect_current_quantity().returning(|_, _| Ok(4.0));
        stock
    }

    fn service(records: Vec<TherapyRecord>) -> ShortageService {
        let mut store = MockTherapyStore::new();
        store.expect_list().returning(move |_| Ok(records.clone()));

        ShortageService::new(
            TherapyService::new(Box::new(catalog()), Box::new(store)),
            StockService::new(Box::new(catalog()), Box::new(location_stock())),
        )
    }

    #[test]
    fn twelve_needed_against_sixteen_available() {
        let service = service(vec![record(1, 5, 2.0)]);
        assert!(service.shortages(PatientId::new(1), day(7)).unwrap().is_empty());
        assert_eq!(service.demand(PatientId::new(1), day(7)).unwrap()[0].needed, 12.0);
    }

    #[test]
    fn shared_medication_reported_once() {
        // 2*3*2 + 1*3*2 = 18 > 16
        let service = service(vec![record(1, 5, 2.0), record(2, 5, 1.0)]);
        let shortages = service.shortages(PatientId::new(1), day(7)).unwrap();
        assert_eq!(shortages.len(), 1);
        assert_eq!(shortages[0].needed, 18.0);
        assert_eq!(shortages[0].deficit(), 2.0);
    }

    #[test]
    fn finished_therapies_impose_no_demand() {
        let service = service(vec![record(1, 5, 100.0)]);
        assert!(service.shortages(PatientId::new(1), day(20)).unwrap().is_empty());
        assert!(service.demand(PatientId::new(1), day(20)).unwrap().is_empty());
    }
}
