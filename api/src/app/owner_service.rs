//! Owner service
//!
//! CRUD over owners. Every lookup by id fails with a typed not-found error
//! instead of returning an empty value.

use std::sync::Arc;

use crate::domain::entities::{EntityKind, NewOwner, Owner, OwnerId};
use crate::domain::ports::OwnerRepository;
use crate::error::{AppError, DomainError};

/// Service for managing owners
pub struct OwnerService<OR>
where
    OR: OwnerRepository,
{
    owners: Arc<OR>,
}

impl<OR> OwnerService<OR>
where
    OR: OwnerRepository,
{
    pub fn new(owners: Arc<OR>) -> Self {
        Self { owners }
    }

    pub async fn create(&self, owner: NewOwner) -> Result<Owner, AppError> {
        let owner = self.owners.create(&owner).await?;
        Ok(owner)
    }

    /// Replace the stored owner with the same id
    pub async fn update(&self, owner: Owner) -> Result<Owner, AppError> {
        let owner = self.owners.update(&owner).await?;
        Ok(owner)
    }

    pub async fn find_by_id(&self, id: OwnerId) -> Result<Owner, AppError> {
        let owner = self
            .owners
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Owner, id))?;
        Ok(owner)
    }

    pub async fn delete(&self, id: OwnerId) -> Result<(), AppError> {
        self.find_by_id(id).await?;
        self.owners.delete(&id).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        Ok(self.owners.find_all().await?)
    }

    pub async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Owner>, AppError> {
        Ok(self.owners.find_by_first_name(first_name).await?)
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        Ok(self.owners.find_by_last_name(last_name).await?)
    }

    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Owner>, AppError> {
        Ok(self.owners.find_by_city(city).await?)
    }
}
