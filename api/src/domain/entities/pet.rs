//! Pet domain entity
//!
//! Pets are read-only here: visits reference them by id.

use chrono::NaiveDate;
use serde::Serialize;

use super::{OwnerId, PetTypeId};

entity_id!(
    /// Unique identifier for a pet
    PetId
);

/// A pet belonging to an owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub type_id: PetTypeId,
    pub owner_id: OwnerId,
}
