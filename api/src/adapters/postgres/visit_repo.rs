//! PostgreSQL adapter for VisitRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_update_err;
use crate::domain::entities::{EntityKind, NewVisit, PetId, Visit, VisitId};
use crate::domain::ports::VisitRepository;
use crate::entity::visits;
use crate::error::DomainError;

/// PostgreSQL implementation of VisitRepository
pub struct PostgresVisitRepository {
    db: DatabaseConnection,
}

impl PostgresVisitRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisitRepository for PostgresVisitRepository {
    async fn find_by_id(&self, id: &VisitId) -> Result<Option<Visit>, DomainError> {
        let result = visits::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Visit>, DomainError> {
        let results = visits::Entity::find()
            .order_by_asc(visits::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_visit_date(&self, date: NaiveDate) -> Result<Vec<Visit>, DomainError> {
        let results = visits::Entity::find()
            .filter(visits::Column::VisitDate.eq(date))
            .order_by_asc(visits::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_pet(&self, pet_id: &PetId) -> Result<Vec<Visit>, DomainError> {
        let results = visits::Entity::find()
            .filter(visits::Column::PetId.eq(pet_id.0))
            .order_by_asc(visits::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, visit: &NewVisit) -> Result<Visit, DomainError> {
        let model = visits::ActiveModel {
            pet_id: Set(visit.pet_id.0),
            visit_date: Set(visit.visit_date),
            description: Set(visit.description.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, visit: &Visit) -> Result<Visit, DomainError> {
        let result = visits::ActiveModel {
            id: Set(visit.id.0),
            pet_id: Set(visit.pet_id.0),
            visit_date: Set(visit.visit_date),
            description: Set(visit.description.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| map_update_err(e, EntityKind::Visit, visit.id.0))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &VisitId) -> Result<(), DomainError> {
        let result = visits::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::Visit, *id));
        }

        Ok(())
    }
}

impl From<visits::Model> for Visit {
    fn from(m: visits::Model) -> Self {
        Visit {
            id: VisitId(m.id),
            visit_date: m.visit_date,
            description: m.description,
            pet_id: PetId(m.pet_id),
        }
    }
}
