//! Vet domain entity
//!
//! A veterinarian and the set of specialties they practice. The set is
//! kept sorted by specialty id with no duplicates.

use serde::Serialize;

use super::{Specialty, SpecialtyId};

entity_id!(
    /// Unique identifier for a vet
    VetId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: VetId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialties: Vec<Specialty>,
}

impl Vet {
    /// Replace the whole specialty set
    pub fn assign_specialties(&mut self, specialties: Vec<Specialty>) {
        self.specialties = normalize_specialties(specialties);
    }

    pub fn specialty_ids(&self) -> Vec<SpecialtyId> {
        self.specialties.iter().map(|s| s.id).collect()
    }
}

/// Data needed to create a new vet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVet {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty_ids: Vec<SpecialtyId>,
}

/// Sort by id and drop repeated ids
pub fn normalize_specialties(mut specialties: Vec<Specialty>) -> Vec<Specialty> {
    specialties.sort_by_key(|s| s.id);
    specialties.dedup_by_key(|s| s.id);
    specialties
}

/// Sort and drop repeated ids
pub fn normalize_specialty_ids(mut ids: Vec<SpecialtyId>) -> Vec<SpecialtyId> {
    ids.sort();
    ids.dedup();
    ids
}
