//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lists are ordered by id. `update` and `delete` report a missing row as
//! `DomainError::NotFound`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{
    NewOwner, NewPetType, NewSpecialty, NewVet, NewVisit, Owner, OwnerId, Pet, PetId, PetType,
    PetTypeId, Specialty, SpecialtyId, Vet, VetId, Visit, VisitId,
};
use crate::error::DomainError;

/// Repository for Owner entities
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Owner>, DomainError>;

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Owner>, DomainError>;

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, DomainError>;

    async fn find_by_city(&self, city: &str) -> Result<Vec<Owner>, DomainError>;

    async fn create(&self, owner: &NewOwner) -> Result<Owner, DomainError>;

    async fn update(&self, owner: &Owner) -> Result<Owner, DomainError>;

    async fn delete(&self, id: &OwnerId) -> Result<(), DomainError>;
}

/// Read access to pets, used to resolve the pet referenced by a visit
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError>;
}

/// Repository for PetType entities
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    async fn find_by_id(&self, id: &PetTypeId) -> Result<Option<PetType>, DomainError>;

    async fn find_all(&self) -> Result<Vec<PetType>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Vec<PetType>, DomainError>;

    async fn create(&self, pet_type: &NewPetType) -> Result<PetType, DomainError>;

    async fn update(&self, pet_type: &PetType) -> Result<PetType, DomainError>;

    async fn delete(&self, id: &PetTypeId) -> Result<(), DomainError>;
}

/// Repository for Specialty entities
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DomainError>;

    /// Fetch every specialty whose id is in `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[SpecialtyId]) -> Result<Vec<Specialty>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Specialty>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Vec<Specialty>, DomainError>;

    async fn create(&self, specialty: &NewSpecialty) -> Result<Specialty, DomainError>;

    async fn update(&self, specialty: &Specialty) -> Result<Specialty, DomainError>;

    async fn delete(&self, id: &SpecialtyId) -> Result<(), DomainError>;
}

/// Repository for Vet entities
///
/// Vets are always loaded together with their specialties. Writes store the
/// vet row and its specialty links in one transaction.
#[async_trait]
pub trait VetRepository: Send + Sync {
    async fn find_by_id(&self, id: &VetId) -> Result<Option<Vet>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Vet>, DomainError>;

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Vet>, DomainError>;

    async fn create(&self, vet: &NewVet) -> Result<Vet, DomainError>;

    /// Overwrite names and replace the whole specialty set
    async fn update(&self, vet: &Vet) -> Result<Vet, DomainError>;

    async fn delete(&self, id: &VetId) -> Result<(), DomainError>;
}

/// Repository for Visit entities
#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn find_by_id(&self, id: &VisitId) -> Result<Option<Visit>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Visit>, DomainError>;

    async fn find_by_visit_date(&self, date: NaiveDate) -> Result<Vec<Visit>, DomainError>;

    async fn find_by_pet(&self, pet_id: &PetId) -> Result<Vec<Visit>, DomainError>;

    async fn create(&self, visit: &NewVisit) -> Result<Visit, DomainError>;

    async fn update(&self, visit: &Visit) -> Result<Visit, DomainError>;

    async fn delete(&self, id: &VisitId) -> Result<(), DomainError>;
}
