//! PostgreSQL adapter for PetTypeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_update_err;
use crate::domain::entities::{EntityKind, NewPetType, PetType, PetTypeId};
use crate::domain::ports::PetTypeRepository;
use crate::entity::types;
use crate::error::DomainError;

/// PostgreSQL implementation of PetTypeRepository
pub struct PostgresPetTypeRepository {
    db: DatabaseConnection,
}

impl PostgresPetTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetTypeRepository for PostgresPetTypeRepository {
    async fn find_by_id(&self, id: &PetTypeId) -> Result<Option<PetType>, DomainError> {
        let result = types::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<PetType>, DomainError> {
        let results = types::Entity::find()
            .order_by_asc(types::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<PetType>, DomainError> {
        let results = types::Entity::find()
            .filter(types::Column::Name.eq(name))
            .order_by_asc(types::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, pet_type: &NewPetType) -> Result<PetType, DomainError> {
        let model = types::ActiveModel {
            name: Set(pet_type.name.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, pet_type: &PetType) -> Result<PetType, DomainError> {
        let result = types::ActiveModel {
            id: Set(pet_type.id.0),
            name: Set(pet_type.name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| map_update_err(e, EntityKind::PetType, pet_type.id.0))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &PetTypeId) -> Result<(), DomainError> {
        let result = types::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::PetType, *id));
        }

        Ok(())
    }
}

impl From<types::Model> for PetType {
    fn from(m: types::Model) -> Self {
        PetType {
            id: PetTypeId(m.id),
            name: m.name,
        }
    }
}
