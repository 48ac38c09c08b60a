//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::domain::entities::{
    NewOwner, Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Specialty, SpecialtyId, Vet, VetId,
    Visit, VisitId,
};

/// Create a test owner with default values
pub fn test_owner(id: i32) -> Owner {
    Owner {
        id: OwnerId(id),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        address: Some("123 Main St".to_string()),
        city: Some("Springfield".to_string()),
        telephone: Some("1234567890".to_string()),
    }
}

/// Owner fields for a create request
pub fn test_new_owner() -> NewOwner {
    NewOwner {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        address: Some("123 Main St".to_string()),
        city: Some("Springfield".to_string()),
        telephone: Some("1234567890".to_string()),
    }
}

/// Create a test pet owned by owner 1
pub fn test_pet(id: i32) -> Pet {
    Pet {
        id: PetId(id),
        name: Some(format!("pet-{}", id)),
        birth_date: NaiveDate::from_ymd_opt(2020, 9, 7),
        type_id: PetTypeId(1),
        owner_id: OwnerId(1),
    }
}

pub fn test_pet_type(id: i32, name: &str) -> PetType {
    PetType {
        id: PetTypeId(id),
        name: Some(name.to_string()),
    }
}

pub fn test_specialty(id: i32, name: &str) -> Specialty {
    Specialty {
        id: SpecialtyId(id),
        name: Some(name.to_string()),
    }
}

/// Create a test vet without specialties
pub fn test_vet(id: i32) -> Vet {
    Vet {
        id: VetId(id),
        first_name: Some("James".to_string()),
        last_name: Some("Carter".to_string()),
        specialties: Vec::new(),
    }
}

/// Create a test visit for the given pet on 2024-01-15
pub fn test_visit(id: i32, pet_id: i32) -> Visit {
    Visit {
        id: VisitId(id),
        visit_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        description: Some("Regular checkup".to_string()),
        pet_id: PetId(pet_id),
    }
}
