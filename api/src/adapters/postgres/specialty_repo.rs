//! PostgreSQL adapter for SpecialtyRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_update_err;
use crate::domain::entities::{EntityKind, NewSpecialty, Specialty, SpecialtyId};
use crate::domain::ports::SpecialtyRepository;
use crate::entity::specialties;
use crate::error::DomainError;

/// PostgreSQL implementation of SpecialtyRepository
pub struct PostgresSpecialtyRepository {
    db: DatabaseConnection,
}

impl PostgresSpecialtyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpecialtyRepository for PostgresSpecialtyRepository {
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DomainError> {
        let result = specialties::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_ids(&self, ids: &[SpecialtyId]) -> Result<Vec<Specialty>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = specialties::Entity::find()
            .filter(specialties::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .order_by_asc(specialties::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_all(&self) -> Result<Vec<Specialty>, DomainError> {
        let results = specialties::Entity::find()
            .order_by_asc(specialties::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Specialty>, DomainError> {
        let results = specialties::Entity::find()
            .filter(specialties::Column::Name.eq(name))
            .order_by_asc(specialties::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, specialty: &NewSpecialty) -> Result<Specialty, DomainError> {
        let model = specialties::ActiveModel {
            name: Set(specialty.name.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, specialty: &Specialty) -> Result<Specialty, DomainError> {
        let result = specialties::ActiveModel {
            id: Set(specialty.id.0),
            name: Set(specialty.name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| map_update_err(e, EntityKind::Specialty, specialty.id.0))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &SpecialtyId) -> Result<(), DomainError> {
        // Links in vet_specialties cascade
        let result = specialties::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::Specialty, *id));
        }

        Ok(())
    }
}

impl From<specialties::Model> for Specialty {
    fn from(m: specialties::Model) -> Self {
        Specialty {
            id: SpecialtyId(m.id),
            name: m.name,
        }
    }
}
