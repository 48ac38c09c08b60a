//! Visit service
//!
//! Besides plain CRUD this turns incoming `VisitDto`s into visits, resolving
//! the referenced pet through `PetService`.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::{PetService, VisitDto};
use crate::domain::entities::{EntityKind, NewVisit, PetId, Visit, VisitDraft, VisitId};
use crate::domain::ports::{PetRepository, VisitRepository};
use crate::error::{AppError, DomainError};

/// Service for managing visits
pub struct VisitService<VR, PR>
where
    VR: VisitRepository,
    PR: PetRepository,
{
    visits: Arc<VR>,
    pets: PetService<PR>,
}

impl<VR, PR> VisitService<VR, PR>
where
    VR: VisitRepository,
    PR: PetRepository,
{
    pub fn new(visits: Arc<VR>, pets: Arc<PR>) -> Self {
        Self {
            visits,
            pets: PetService::new(pets),
        }
    }

    /// Build a draft from a transport record. A present `petId` must name an
    /// existing pet.
    pub async fn to_draft(&self, dto: VisitDto) -> Result<VisitDraft, AppError> {
        let visit_date = dto.parsed_visit_date()?;

        let pet = match dto.pet_id {
            Some(pet_id) => Some(self.pets.find_pet_by_id(PetId(pet_id)).await?),
            None => None,
        };

        Ok(VisitDraft {
            id: dto.id.map(VisitId),
            visit_date,
            description: dto.description,
            pet,
        })
    }

    /// Create a visit from a transport record. Any id in the record is ignored.
    pub async fn create_from_dto(&self, dto: VisitDto) -> Result<Visit, AppError> {
        let new_visit = self.to_draft(dto).await?.into_new_visit()?;
        self.create(new_visit).await
    }

    /// Overwrite the visit `id` from a transport record. The pet is kept
    /// when the record has no `petId`.
    pub async fn update_from_dto(&self, id: VisitId, dto: VisitDto) -> Result<Visit, AppError> {
        let mut visit = self.find_by_id(id).await?;
        let draft = self.to_draft(dto).await?;
        if let Some(body_id) = draft.id.filter(|body_id| *body_id != id) {
            tracing::debug!(visit_id = %id, %body_id, "Ignoring mismatched id in visit body");
        }
        visit.apply(draft);
        self.update(visit).await
    }

    pub async fn create(&self, visit: NewVisit) -> Result<Visit, AppError> {
        Ok(self.visits.create(&visit).await?)
    }

    pub async fn update(&self, visit: Visit) -> Result<Visit, AppError> {
        Ok(self.visits.update(&visit).await?)
    }

    pub async fn find_by_id(&self, id: VisitId) -> Result<Visit, AppError> {
        let visit = self
            .visits
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Visit, id))?;
        Ok(visit)
    }

    pub async fn delete(&self, id: VisitId) -> Result<(), AppError> {
        self.find_by_id(id).await?;
        self.visits.delete(&id).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Visit>, AppError> {
        Ok(self.visits.find_all().await?)
    }

    pub async fn find_by_visit_date(&self, date: NaiveDate) -> Result<Vec<Visit>, AppError> {
        Ok(self.visits.find_by_visit_date(date).await?)
    }

    pub async fn find_by_pet(&self, pet_id: PetId) -> Result<Vec<Visit>, AppError> {
        Ok(self.visits.find_by_pet(&pet_id).await?)
    }
}
