//! Built-in demo data.
//!
//! Used by the CLI when no snapshot file is configured, and by tests that
//! want a small but realistic ward:
//!
//! - three medications, one of them under its reorder threshold;
//! - two locations, `WARD-A` with stock and `WARD-B` empty;
//! - patient 7 (reachable by SMS) on two therapies in January 2024;
//! - patient 8 without a phone number.

use chrono::{NaiveDate, NaiveDateTime};

use theraplan_core::domain::{
    LocationId, Medication, MedicationId, Patient, PatientId, TherapyId, TherapyRecord,
};

use crate::snapshot::{Snapshot, StockEntry};

/// The demo snapshot.
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        locations: vec![LocationId::new("WARD-B")],
        medications: vec![
            Medication::new(MedicationId::new(1), "Amoxicillin 500mg")
                .with_kind("antibiotic")
                .with_ledger(10.0, 5.0, 3.0)
                .with_min_quantity(20.0),
            Medication::new(MedicationId::new(2), "Paracetamol 1g")
                .with_kind("analgesic")
                .with_ledger(100.0, 0.0, 40.0)
                .with_min_quantity(30.0),
            Medication::new(MedicationId::new(3), "Enoxaparin 40mg")
                .with_kind("anticoagulant")
                .with_ledger(6.0, 0.0, 0.0)
                .with_min_quantity(5.0),
        ],
        stock: vec![
            StockEntry {
                location: LocationId::new("WARD-A"),
                medication: MedicationId::new(1),
                quantity: 4.0,
            },
            StockEntry {
                location: LocationId::new("WARD-A"),
                medication: MedicationId::new(2),
                quantity: 10.0,
            },
        ],
        patients: vec![
            Patient::new(PatientId::new(7), "Jane Doe").with_phone("+15550100"),
            Patient::new(PatientId::new(8), "John Roe"),
        ],
        therapies: vec![
            therapy(7, 1, (1, 10), 2.0, 3, 3, Some("after meals"), true),
            therapy(7, 3, (1, 5), 1.0, 1, 1, None, false),
            therapy(8, 2, (2, 6), 1.0, 2, 2, None, true),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn therapy(
    patient: i32,
    medication: i32,
    (first, last): (u32, u32),
    quantity: f64,
    doses_per_day: i32,
    frequency_days: i32,
    note: Option<&str>,
    sms: bool,
) -> TherapyRecord {
    TherapyRecord {
        id: TherapyId::default(),
        patient: PatientId::new(patient),
        start: january(first),
        end: january(last),
        medication: MedicationId::new(medication),
        quantity,
        unit: "tab".into(),
        doses_per_day,
        frequency_days,
        note: note.map(str::to_owned),
        notify: sms,
        sms,
    }
}

fn january(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use theraplan_core::{
        application::ports::{LocationStock, TherapyStore},
        domain::DomainValidator,
    };

    #[test]
    fn demo_data_is_valid() {
        let snapshot = demo_snapshot();
        for medication in &snapshot.medications {
            assert!(DomainValidator::validate_medication(medication).is_ok());
        }
        for therapy in &snapshot.therapies {
            assert!(DomainValidator::validate_therapy(therapy).is_ok());
        }
    }

    #[test]
    fn demo_loads_into_stores() {
        let stores = demo_snapshot().into_stores().unwrap();
        assert_eq!(stores.catalog.len(), 3);
        assert_eq!(
            stores.stock.locations().unwrap(),
            vec![LocationId::new("WARD-A"), LocationId::new("WARD-B")]
        );
        assert_eq!(stores.therapies.list(PatientId::new(7)).unwrap().len(), 2);
    }
}
