//! Specialty domain entity
//!
//! A veterinary specialty (radiology, surgery, ...). Vets hold a set of them.

use serde::Serialize;

entity_id!(
    /// Unique identifier for a specialty
    SpecialtyId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: Option<String>,
}

/// Data needed to create a new specialty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSpecialty {
    pub name: Option<String>,
}
