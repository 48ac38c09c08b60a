//! Pet service
//!
//! Pets are only looked up here; visits use this to resolve their pet.

use std::sync::Arc;

use crate::domain::entities::{EntityKind, Pet, PetId};
use crate::domain::ports::PetRepository;
use crate::error::{AppError, DomainError};

/// Service for looking up pets
pub struct PetService<PR>
where
    PR: PetRepository,
{
    pets: Arc<PR>,
}

impl<PR> PetService<PR>
where
    PR: PetRepository,
{
    pub fn new(pets: Arc<PR>) -> Self {
        Self { pets }
    }

    pub async fn find_pet_by_id(&self, id: PetId) -> Result<Pet, AppError> {
        let pet = self
            .pets
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Pet, id))?;
        Ok(pet)
    }
}
