//! Projected medication demand for a patient's therapies.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{entities::TherapyPlan, value_objects::MedicationId};

/// Quantity of one medication still needed by the remaining doses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demand {
    pub medication: MedicationId,
    pub description: String,
    /// Administration dates at or after the reference instant, summed over
    /// every plan using the medication.
    pub remaining_dates: usize,
    pub needed: f64,
}

/// Sum the remaining demand per medication.
///
/// A date counts when it is at or after `as_of`. Each plan contributes
/// `quantity × doses_per_day × remaining dates`. Medications whose plans
/// have no remaining date are left out entirely. The result follows the
/// order in which medications first appear in `plans`.
///
/// `as_of` is taken once by the caller, so a projection straddling midnight
/// stays consistent.
pub fn project_demand(plans: &[TherapyPlan], as_of: NaiveDateTime) -> Vec<Demand> {
    let mut demands: Vec<Demand> = Vec::new();
    let mut index: HashMap<MedicationId, usize> = HashMap::new();

    for plan in plans {
        let remaining = plan.remaining_dates(as_of);
        let slot = *index.entry(plan.medication_id()).or_insert_with(|| {
            demands.push(Demand {
                medication: plan.medication_id(),
                description: plan.medication.description.clone(),
                remaining_dates: 0,
                needed: 0.0,
            });
            demands.len() - 1
        });

        let demand = &mut demands[slot];
        demand.remaining_dates += remaining;
        demand.needed += plan.daily_quantity() * remaining as f64;
    }

    demands.retain(|d| d.remaining_dates > 0);
    demands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Medication, TherapyRecord},
        schedule::start_of_day,
        value_objects::{PatientId, TherapyId},
    };
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> NaiveDateTime {
        start_of_day(NaiveDate::from_ymd_opt(2024, m, d).unwrap())
    }

    fn plan(id: i32, med: i32, start: NaiveDateTime, end: NaiveDateTime, qty: f64) -> TherapyPlan {
        let record = TherapyRecord {
            id: TherapyId::new(id),
            patient: PatientId::new(1),
            start,
            end,
            medication: MedicationId::new(med),
            quantity: qty,
            unit: "tab".into(),
            doses_per_day: 3,
            frequency_days: 3,
            note: None,
            notify: false,
            sms: false,
        };
        let medication = Medication::new(MedicationId::new(med), format!("Med {med}"));
        TherapyPlan::expand(&record, &medication).unwrap()
    }

    #[test]
    fn two_remaining_dates_need_twelve() {
        // dates: 01-01, 01-04, 01-07, 01-10; two at or after 01-07
        let plans = [plan(1, 5, day(1, 1), day(1, 10), 2.0)];
        let demand = project_demand(&plans, day(1, 7));
        assert_eq!(demand.len(), 1);
        assert_eq!(demand[0].remaining_dates, 2);
        assert_eq!(demand[0].needed, 12.0);
    }

    #[test]
    fn past_therapy_contributes_nothing() {
        let plans = [plan(1, 5, day(1, 1), day(1, 10), 2.0)];
        assert!(project_demand(&plans, day(2, 1)).is_empty());
    }

    #[test]
    fn plans_sharing_a_medication_are_summed() {
        let plans = [
            plan(1, 5, day(1, 1), day(1, 10), 2.0),
            plan(2, 9, day(1, 1), day(1, 1), 1.0),
            plan(3, 5, day(1, 7), day(1, 7), 1.0),
        ];
        let demand = project_demand(&plans, day(1, 7));
        assert_eq!(demand.len(), 1);
        assert_eq!(demand[0].medication, MedicationId::new(5));
        // 2*3*2 + 1*3*1
        assert_eq!(demand[0].needed, 15.0);
        assert_eq!(demand[0].remaining_dates, 3);
    }

    #[test]
    fn order_is_first_encounter() {
        let plans = [
            plan(1, 9, day(1, 1), day(1, 10), 1.0),
            plan(2, 2, day(1, 1), day(1, 10), 1.0),
            plan(3, 9, day(1, 1), day(1, 10), 1.0),
        ];
        let ids: Vec<_> = project_demand(&plans, day(1, 1))
            .into_iter()
            .map(|d| d.medication.get())
            .collect();
        assert_eq!(ids, vec![9, 2]);
    }
}
