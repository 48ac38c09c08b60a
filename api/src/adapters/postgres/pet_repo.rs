//! PostgreSQL adapter for PetRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::entities::{OwnerId, Pet, PetId, PetTypeId};
use crate::domain::ports::PetRepository;
use crate::entity::pets;
use crate::error::DomainError;

/// PostgreSQL implementation of PetRepository
pub struct PostgresPetRepository {
    db: DatabaseConnection,
}

impl PostgresPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PostgresPetRepository {
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        let result = pets::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

impl From<pets::Model> for Pet {
    fn from(m: pets::Model) -> Self {
        Pet {
            id: PetId(m.id),
            name: m.name,
            birth_date: m.birth_date,
            type_id: PetTypeId(m.type_id),
            owner_id: OwnerId(m.owner_id),
        }
    }
}
