//! PostgreSQL adapter for VetRepository
//!
//! Vets are read with their specialties in a single joined query. Writes
//! touch the vet row and its `vet_specialties` links inside one
//! transaction.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Select, Set, TransactionTrait,
};

use super::map_update_err;
use crate::domain::entities::{EntityKind, NewVet, Specialty, SpecialtyId, Vet, VetId};
use crate::domain::ports::VetRepository;
use crate::entity::{specialties, vet_specialties, vets};
use crate::error::DomainError;

/// PostgreSQL implementation of VetRepository
pub struct PostgresVetRepository {
    db: DatabaseConnection,
}

impl PostgresVetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run a vet query and attach each vet's specialties
    async fn load(&self, query: Select<vets::Entity>) -> Result<Vec<Vet>, DomainError> {
        let rows = query
            .find_with_related(specialties::Entity)
            .order_by_asc(vets::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(vet, specialties)| to_vet(vet, specialties))
            .collect())
    }

    async fn reload(&self, id: VetId) -> Result<Vet, DomainError> {
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Vet, id))
    }
}

#[async_trait]
impl VetRepository for PostgresVetRepository {
    async fn find_by_id(&self, id: &VetId) -> Result<Option<Vet>, DomainError> {
        let vets = self.load(vets::Entity::find_by_id(id.0)).await?;
        Ok(vets.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Vet>, DomainError> {
        self.load(vets::Entity::find()).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Vet>, DomainError> {
        self.load(vets::Entity::find().filter(vets::Column::LastName.eq(last_name)))
            .await
    }

    async fn create(&self, vet: &NewVet) -> Result<Vet, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let inserted = vets::ActiveModel {
            first_name: Set(vet.first_name.clone()),
            last_name: Set(vet.last_name.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        insert_links(&txn, inserted.id, &vet.specialty_ids).await?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(vet_id = inserted.id, "Vet created");
        self.reload(VetId(inserted.id)).await
    }

    async fn update(&self, vet: &Vet) -> Result<Vet, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        vets::ActiveModel {
            id: Set(vet.id.0),
            first_name: Set(vet.first_name.clone()),
            last_name: Set(vet.last_name.clone()),
        }
        .update(&txn)
        .await
        .map_err(|e| map_update_err(e, EntityKind::Vet, vet.id.0))?;

        vet_specialties::Entity::delete_many()
            .filter(vet_specialties::Column::VetId.eq(vet.id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        insert_links(&txn, vet.id.0, &vet.specialty_ids()).await?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        self.reload(vet.id).await
    }

    async fn delete(&self, id: &VetId) -> Result<(), DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        vet_specialties::Entity::delete_many()
            .filter(vet_specialties::Column::VetId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = vets::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::Vet, *id));
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Insert one join row per specialty id. Ids must already be unique.
async fn insert_links<C: ConnectionTrait>(
    conn: &C,
    vet_id: i32,
    specialty_ids: &[SpecialtyId],
) -> Result<(), DomainError> {
    if specialty_ids.is_empty() {
        return Ok(());
    }

    let links = specialty_ids.iter().map(|id| vet_specialties::ActiveModel {
        vet_id: Set(vet_id),
        specialty_id: Set(id.0),
    });

    vet_specialties::Entity::insert_many(links)
        .exec_without_returning(conn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}

fn to_vet(model: vets::Model, specialties: Vec<specialties::Model>) -> Vet {
    let mut vet = Vet {
        id: VetId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        specialties: Vec::new(),
    };
    vet.assign_specialties(specialties.into_iter().map(Specialty::from).collect());
    vet
}
