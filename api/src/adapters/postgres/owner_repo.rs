//! PostgreSQL adapter for OwnerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_update_err;
use crate::domain::entities::{EntityKind, NewOwner, Owner, OwnerId};
use crate::domain::ports::OwnerRepository;
use crate::entity::owners;
use crate::error::DomainError;

/// PostgreSQL implementation of OwnerRepository
pub struct PostgresOwnerRepository {
    db: DatabaseConnection,
}

impl PostgresOwnerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_where(
        &self,
        column: owners::Column,
        value: &str,
    ) -> Result<Vec<Owner>, DomainError> {
        let results = owners::Entity::find()
            .filter(column.eq(value))
            .order_by_asc(owners::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        let result = owners::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, DomainError> {
        let results = owners::Entity::find()
            .order_by_asc(owners::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Owner>, DomainError> {
        self.find_where(owners::Column::FirstName, first_name).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, DomainError> {
        self.find_where(owners::Column::LastName, last_name).await
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Owner>, DomainError> {
        self.find_where(owners::Column::City, city).await
    }

    async fn create(&self, owner: &NewOwner) -> Result<Owner, DomainError> {
        let model = owners::ActiveModel {
            first_name: Set(owner.first_name.clone()),
            last_name: Set(owner.last_name.clone()),
            address: Set(owner.address.clone()),
            city: Set(owner.city.clone()),
            telephone: Set(owner.telephone.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, owner: &Owner) -> Result<Owner, DomainError> {
        let model = owners::ActiveModel {
            id: Set(owner.id.0),
            first_name: Set(owner.first_name.clone()),
            last_name: Set(owner.last_name.clone()),
            address: Set(owner.address.clone()),
            city: Set(owner.city.clone()),
            telephone: Set(owner.telephone.clone()),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_update_err(e, EntityKind::Owner, owner.id.0))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &OwnerId) -> Result<(), DomainError> {
        let result = owners::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::Owner, *id));
        }

        Ok(())
    }
}

impl From<owners::Model> for Owner {
    fn from(m: owners::Model) -> Self {
        Owner {
            id: OwnerId(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            address: m.address,
            city: m.city,
            telephone: m.telephone,
        }
    }
}
