//! Vet service
//!
//! Vets carry a set of specialties. Every specialty id given on create or
//! update must already exist; the check runs before anything is written.

use std::sync::Arc;

use crate::domain::entities::vet::normalize_specialty_ids;
use crate::domain::entities::{EntityKind, NewVet, Specialty, SpecialtyId, Vet, VetId};
use crate::domain::ports::{SpecialtyRepository, VetRepository};
use crate::error::{AppError, DomainError};

/// Service for managing vets and their specialties
pub struct VetService<VR, SR>
where
    VR: VetRepository,
    SR: SpecialtyRepository,
{
    vets: Arc<VR>,
    specialties: Arc<SR>,
}

impl<VR, SR> VetService<VR, SR>
where
    VR: VetRepository,
    SR: SpecialtyRepository,
{
    pub fn new(vets: Arc<VR>, specialties: Arc<SR>) -> Self {
        Self { vets, specialties }
    }

    pub async fn create(&self, vet: NewVet) -> Result<Vet, AppError> {
        let specialties = self.resolve_specialties(vet.specialty_ids).await?;

        let vet = NewVet {
            specialty_ids: specialties.iter().map(|s| s.id).collect(),
            ..vet
        };
        Ok(self.vets.create(&vet).await?)
    }

    /// Replace the stored vet, including its whole specialty set
    pub async fn update(&self, mut vet: Vet) -> Result<Vet, AppError> {
        let specialties = self.resolve_specialties(vet.specialty_ids()).await?;
        vet.assign_specialties(specialties);

        Ok(self.vets.update(&vet).await?)
    }

    pub async fn find_by_id(&self, id: VetId) -> Result<Vet, AppError> {
        let vet = self
            .vets
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Vet, id))?;
        Ok(vet)
    }

    pub async fn delete(&self, id: VetId) -> Result<(), AppError> {
        self.find_by_id(id).await?;
        self.vets.delete(&id).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Vet>, AppError> {
        Ok(self.vets.find_all().await?)
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Vet>, AppError> {
        Ok(self.vets.find_by_last_name(last_name).await?)
    }

    /// Load the stored specialties for `ids`, failing on the first unknown id
    async fn resolve_specialties(
        &self,
        ids: Vec<SpecialtyId>,
    ) -> Result<Vec<Specialty>, AppError> {
        let ids = normalize_specialty_ids(ids);
        let found = self.specialties.find_by_ids(&ids).await?;

        if let Some(missing) = ids.iter().find(|id| !found.iter().any(|s| s.id == **id)) {
            return Err(DomainError::not_found(EntityKind::Specialty, *missing).into());
        }

        Ok(found)
    }
}
