//! Specialty service

use std::sync::Arc;

use crate::domain::entities::{EntityKind, NewSpecialty, Specialty, SpecialtyId};
use crate::domain::ports::SpecialtyRepository;
use crate::error::{AppError, DomainError};

/// Service for managing vet specialties
pub struct SpecialtyService<SR>
where
    SR: SpecialtyRepository,
{
    specialties: Arc<SR>,
}

impl<SR> SpecialtyService<SR>
where
    SR: SpecialtyRepository,
{
    pub fn new(specialties: Arc<SR>) -> Self {
        Self { specialties }
    }

    pub async fn create(&self, specialty: NewSpecialty) -> Result<Specialty, AppError> {
        Ok(self.specialties.create(&specialty).await?)
    }

    pub async fn update(&self, specialty: Specialty) -> Result<Specialty, AppError> {
        Ok(self.specialties.update(&specialty).await?)
    }

    pub async fn find_by_id(&self, id: SpecialtyId) -> Result<Specialty, AppError> {
        let specialty = self
            .specialties
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Specialty, id))?;
        Ok(specialty)
    }

    pub async fn delete(&self, id: SpecialtyId) -> Result<(), AppError> {
        self.find_by_id(id).await?;
        self.specialties.delete(&id).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Specialty>, AppError> {
        Ok(self.specialties.find_all().await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Specialty>, AppError> {
        Ok(self.specialties.find_by_name(name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_specialty, InMemorySpecialtyRepository};

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let service = SpecialtyService::new(Arc::new(
            InMemorySpecialtyRepository::new()
                .with_specialty(test_specialty(3, "dentistry"))
                .with_specialty(test_specialty(1, "radiology"))
                .with_specialty(test_specialty(2, "surgery")),
        ));

        let ids: Vec<i32> = service
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let service = SpecialtyService::new(Arc::new(InMemorySpecialtyRepository::new()));

        let err = service
            .update(test_specialty(8, "oncology"))
            .await
            .unwrap_err();
        assert!(err.is_not_found(EntityKind::Specialty));
    }

    #[tokio::test]
    async fn delete_removes_specialty() {
        let service = SpecialtyService::new(Arc::new(
            InMemorySpecialtyRepository::new().with_specialty(test_specialty(1, "radiology")),
        ));

        service.delete(SpecialtyId(1)).await.unwrap();
        assert!(service.find_all().await.unwrap().is_empty());
    }
}
