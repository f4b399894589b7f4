//! Domain value objects: identifiers and the stock location scope.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity of
//! their own. Numeric identifiers mirror the integer keys of the hospital
//! store; location codes are free-form strings.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Numeric identifiers ──────────────────────────────────────────────────────

/// Catalog code of a medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicationId(i32);

impl MedicationId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MedicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MedicationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier {
                kind: "medication id",
                value: s.to_owned(),
            })
    }
}

/// Identifier of a patient in the hospital directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(i32);

impl PatientId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier {
                kind: "patient id",
                value: s.to_owned(),
            })
    }
}

/// Identifier of a persisted therapy record.
///
/// `TherapyId::UNASSIGNED` marks a record that has not been inserted yet;
/// the store hands out real identifiers on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TherapyId(i32);

impl TherapyId {
    pub const UNASSIGNED: Self = Self(0);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl Default for TherapyId {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for TherapyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Locations ────────────────────────────────────────────────────────────────

/// Code of a storage location (ward pharmacy, satellite store, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Which storage locations contribute to an available-quantity figure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationScope {
    /// Main store plus every storage location.
    #[default]
    All,
    /// Main store plus one named location.
    Single(LocationId),
}

impl LocationScope {
    /// The location filter handed to the `LocationStock` port.
    pub fn location(&self) -> Option<&LocationId> {
        match self {
            Self::All => None,
            Self::Single(id) => Some(id),
        }
    }
}

impl From<Option<LocationId>> for LocationScope {
    fn from(location: Option<LocationId>) -> Self {
        location.map_or(Self::All, Self::Single)
    }
}

impl fmt::Display for LocationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all locations"),
            Self::Single(id) => write!(f, "location {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_trimmed_strings() {
        assert_eq!("42".parse::<MedicationId>().unwrap(), MedicationId::new(42));
        assert_eq!(" 7 ".parse::<PatientId>().unwrap(), PatientId::new(7));
        assert!("abc".parse::<PatientId>().is_err());
    }

    #[test]
    fn unparsable_id_names_the_bad_value() {
        let err = "abc".parse::<MedicationId>().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidIdentifier {
                kind: "medication id",
                value: "abc".into(),
            }
        );
        assert_eq!(err.to_string(), "Invalid medication id 'abc': expected a whole number");

        let err = "".parse::<PatientId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { kind: "patient id", .. }));
    }

    #[test]
    fn scope_defaults_to_all_locations() {
        assert_eq!(LocationScope::default(), LocationScope::All);
        assert_eq!(LocationScope::from(None), LocationScope::All);
        assert!(LocationScope::All.location().is_none());
    }

    #[test]
    fn single_scope_exposes_its_location() {
        let scope = LocationScope::from(Some(LocationId::from("WARD-A")));
        assert_eq!(scope.location().map(LocationId::as_str), Some("WARD-A"));
        assert_eq!(scope.to_string(), "location WARD-A");
    }

    #[test]
    fn unassigned_therapy_id() {
        assert!(!TherapyId::default().is_assigned());
        assert!(TherapyId::new(3).is_assigned());
    }
}
