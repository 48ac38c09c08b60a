//! Pet type domain entity (cat, dog, ...)

use serde::Serialize;

entity_id!(
    /// Unique identifier for a pet type
    PetTypeId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetType {
    pub id: PetTypeId,
    pub name: Option<String>,
}

/// Data needed to create a new pet type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPetType {
    pub name: Option<String>,
}
