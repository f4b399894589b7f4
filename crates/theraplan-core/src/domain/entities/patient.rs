use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PatientId;

/// The slice of a patient record the therapy subsystem needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Patient {
    pub fn new(id: PatientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Phone number usable as a reminder recipient, if any.
    pub fn reachable_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
