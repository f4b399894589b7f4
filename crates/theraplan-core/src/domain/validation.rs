use crate::domain::{
    entities::{Medication, TherapyRecord},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_therapy(record: &TherapyRecord) -> Result<(), DomainError> {
        record.validate()
    }

    pub fn validate_medication(medication: &Medication) -> Result<(), DomainError> {
        medication.validate()
    }

    /// Location stock may be negative but must be a real number.
    pub fn validate_stock_quantity(quantity: f64) -> Result<(), DomainError> {
        if quantity.is_finite() {
            Ok(())
        } else {
            Err(DomainError::InvalidQuantity {
                field: "location stock",
                quantity,
            })
        }
    }
}
