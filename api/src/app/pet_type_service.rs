//! Pet type service

use std::sync::Arc;

use crate::domain::entities::{EntityKind, NewPetType, PetType, PetTypeId};
use crate::domain::ports::PetTypeRepository;
use crate::error::{AppError, DomainError};

/// Service for managing pet types
pub struct PetTypeService<TR>
where
    TR: PetTypeRepository,
{
    pet_types: Arc<TR>,
}

impl<TR> PetTypeService<TR>
where
    TR: PetTypeRepository,
{
    pub fn new(pet_types: Arc<TR>) -> Self {
        Self { pet_types }
    }

    pub async fn create(&self, pet_type: NewPetType) -> Result<PetType, AppError> {
        Ok(self.pet_types.create(&pet_type).await?)
    }

    pub async fn update(&self, pet_type: PetType) -> Result<PetType, AppError> {
        Ok(self.pet_types.update(&pet_type).await?)
    }

    pub async fn find_by_id(&self, id: PetTypeId) -> Result<PetType, AppError> {
        let pet_type = self
            .pet_types
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::PetType, id))?;
        Ok(pet_type)
    }

    pub async fn delete(&self, id: PetTypeId) -> Result<(), AppError> {
        self.find_by_id(id).await?;
        self.pet_types.delete(&id).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<PetType>, AppError> {
        Ok(self.pet_types.find_all().await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<PetType>, AppError> {
        Ok(self.pet_types.find_by_name(name).await?)
    }
}
