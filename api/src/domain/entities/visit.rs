//! Visit domain entity
//!
//! A visit of a pet to the clinic. A persisted visit always references an
//! existing pet; `VisitDraft` is the transient form built from a request,
//! where the pet may still be missing.

use chrono::NaiveDate;

use super::{Pet, PetId};
use crate::error::DomainError;

entity_id!(
    /// Unique identifier for a visit
    VisitId
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: VisitId,
    pub visit_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pet_id: PetId,
}

impl Visit {
    /// Overwrite date and description from a draft. The pet is only
    /// replaced when the draft resolved one.
    pub fn apply(&mut self, draft: VisitDraft) {
        self.visit_date = draft.visit_date;
        self.description = draft.description;
        if let Some(pet) = draft.pet {
            self.pet_id = pet.id;
        }
    }
}

/// Data needed to create a new visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub visit_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pet_id: PetId,
}

/// A visit built from request data, with its pet already resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitDraft {
    pub id: Option<VisitId>,
    pub visit_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pet: Option<Pet>,
}

impl VisitDraft {
    /// Turn the draft into an insertable visit. Fails without a pet.
    pub fn into_new_visit(self) -> Result<NewVisit, DomainError> {
        let pet = self
            .pet
            .ok_or_else(|| DomainError::Validation("petId is required".to_string()))?;

        Ok(NewVisit {
            visit_date: self.visit_date,
            description: self.description,
            pet_id: pet.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{OwnerId, PetTypeId};

    fn pet(id: i32) -> Pet {
        Pet {
            id: PetId(id),
            name: Some("Leo".to_string()),
            birth_date: None,
            type_id: PetTypeId(1),
            owner_id: OwnerId(1),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn apply_keeps_pet_when_draft_has_none() {
        let mut visit = Visit {
            id: VisitId(1),
            visit_date: Some(date("2024-03-10")),
            description: Some("VisitToUpdate".to_string()),
            pet_id: PetId(1),
        };

        visit.apply(VisitDraft {
            id: None,
            visit_date: Some(date("2024-03-15")),
            description: Some("UpdatedVisit".to_string()),
            pet: None,
        });

        assert_eq!(visit.id, VisitId(1));
        assert_eq!(visit.visit_date, Some(date("2024-03-15")));
        assert_eq!(visit.description.as_deref(), Some("UpdatedVisit"));
        assert_eq!(visit.pet_id, PetId(1));
    }

    #[test]
    fn apply_replaces_pet_when_resolved() {
        let mut visit = Visit {
            id: VisitId(2),
            visit_date: None,
            description: None,
            pet_id: PetId(1),
        };

        visit.apply(VisitDraft {
            pet: Some(pet(8)),
            ..Default::default()
        });

        assert_eq!(visit.pet_id, PetId(8));
    }

    #[test]
    fn draft_without_pet_is_rejected() {
        let draft = VisitDraft {
            description: Some("Regular checkup".to_string()),
            ..Default::default()
        };

        let result = draft.into_new_visit();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn draft_with_pet_becomes_new_visit() {
        let draft = VisitDraft {
            id: None,
            visit_date: Some(date("2024-01-15")),
            description: Some("Regular checkup".to_string()),
            pet: Some(pet(1)),
        };

        let new_visit = draft.into_new_visit().unwrap();
        assert_eq!(new_visit.pet_id, PetId(1));
        assert_eq!(new_visit.visit_date, Some(date("2024-01-15")));
    }
}
