//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//! Ids are assigned as one past the largest stored id.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    EntityKind, NewOwner, NewPetType, NewSpecialty, NewVet, NewVisit, Owner, OwnerId, Pet, PetId,
    PetType, PetTypeId, Specialty, SpecialtyId, Vet, VetId, Visit, VisitId,
};
use crate::domain::ports::{
    OwnerRepository, PetRepository, PetTypeRepository, SpecialtyRepository, VetRepository,
    VisitRepository,
};
use crate::error::DomainError;

/// Next free id in a map keyed by an integer id
fn next_id<K: Copy + Into<i32>, V>(map: &HashMap<K, V>) -> i32 {
    map.keys().map(|k| (*k).into()).max().unwrap_or(0) + 1
}

/// All values sorted by id
fn sorted<K: Ord + Copy, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    let mut entries: Vec<(K, V)> = map.iter().map(|(k, v)| (*k, v.clone())).collect();
    entries.sort_by_key(|(k, _)| *k);
    entries.into_iter().map(|(_, v)| v).collect()
}

// ============================================================================
// In-Memory Owner Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOwnerRepository {
    owners: Arc<RwLock<HashMap<OwnerId, Owner>>>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an owner for testing
    pub fn with_owner(self, owner: Owner) -> Self {
        self.owners.write().unwrap().insert(owner.id, owner);
        self
    }

    fn filtered(&self, pred: impl Fn(&Owner) -> bool) -> Vec<Owner> {
        let owners = self.owners.read().unwrap();
        sorted(&owners).into_iter().filter(|o| pred(o)).collect()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        Ok(self.owners.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Owner>, DomainError> {
        Ok(sorted(&self.owners.read().unwrap()))
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Owner>, DomainError> {
        Ok(self.filtered(|o| o.first_name.as_deref() == Some(first_name)))
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, DomainError> {
        Ok(self.filtered(|o| o.last_name.as_deref() == Some(last_name)))
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Owner>, DomainError> {
        Ok(self.filtered(|o| o.city.as_deref() == Some(city)))
    }

    async fn create(&self, owner: &NewOwner) -> Result<Owner, DomainError> {
        let mut owners = self.owners.write().unwrap();
        let created = Owner {
            id: OwnerId(next_id(&owners)),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        };
        owners.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, owner: &Owner) -> Result<Owner, DomainError> {
        let mut owners = self.owners.write().unwrap();
        match owners.get_mut(&owner.id) {
            Some(stored) => {
                *stored = owner.clone();
                Ok(owner.clone())
            }
            None => Err(DomainError::not_found(EntityKind::Owner, owner.id)),
        }
    }

    async fn delete(&self, id: &OwnerId) -> Result<(), DomainError> {
        self.owners
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::Owner, *id))
    }
}

// ============================================================================
// In-Memory Pet Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<HashMap<PetId, Pet>>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pet(self, pet: Pet) -> Self {
        self.pets.write().unwrap().insert(pet.id, pet);
        self
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn find_by_id(&self, id: &PetId) -> Result<Option<Pet>, DomainError> {
        Ok(self.pets.read().unwrap().get(id).cloned())
    }
}

// ============================================================================
// In-Memory PetType Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPetTypeRepository {
    pet_types: Arc<RwLock<HashMap<PetTypeId, PetType>>>,
}

impl InMemoryPetTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pet_type(self, pet_type: PetType) -> Self {
        self.pet_types
            .write()
            .unwrap()
            .insert(pet_type.id, pet_type);
        self
    }
}

#[async_trait]
impl PetTypeRepository for InMemoryPetTypeRepository {
    async fn find_by_id(&self, id: &PetTypeId) -> Result<Option<PetType>, DomainError> {
        Ok(self.pet_types.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PetType>, DomainError> {
        Ok(sorted(&self.pet_types.read().unwrap()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<PetType>, DomainError> {
        let pet_types = self.pet_types.read().unwrap();
        Ok(sorted(&pet_types)
            .into_iter()
            .filter(|t| t.name.as_deref() == Some(name))
            .collect())
    }

    async fn create(&self, pet_type: &NewPetType) -> Result<PetType, DomainError> {
        let mut pet_types = self.pet_types.write().unwrap();
        let created = PetType {
            id: PetTypeId(next_id(&pet_types)),
            name: pet_type.name.clone(),
        };
        pet_types.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, pet_type: &PetType) -> Result<PetType, DomainError> {
        let mut pet_types = self.pet_types.write().unwrap();
        match pet_types.get_mut(&pet_type.id) {
            Some(stored) => {
                *stored = pet_type.clone();
                Ok(pet_type.clone())
            }
            None => Err(DomainError::not_found(EntityKind::PetType, pet_type.id)),
        }
    }

    async fn delete(&self, id: &PetTypeId) -> Result<(), DomainError> {
        self.pet_types
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::PetType, *id))
    }
}

// ============================================================================
// In-Memory Specialty Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySpecialtyRepository {
    specialties: Arc<RwLock<HashMap<SpecialtyId, Specialty>>>,
}

impl InMemorySpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specialty(self, specialty: Specialty) -> Self {
        self.specialties
            .write()
            .unwrap()
            .insert(specialty.id, specialty);
        self
    }
}

#[async_trait]
impl SpecialtyRepository for InMemorySpecialtyRepository {
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DomainError> {
        Ok(self.specialties.read().unwrap().get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[SpecialtyId]) -> Result<Vec<Specialty>, DomainError> {
        let specialties = self.specialties.read().unwrap();
        Ok(sorted(&specialties)
            .into_iter()
            .filter(|s| ids.contains(&s.id))
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Specialty>, DomainError> {
        Ok(sorted(&self.specialties.read().unwrap()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Specialty>, DomainError> {
        let specialties = self.specialties.read().unwrap();
        Ok(sorted(&specialties)
            .into_iter()
            .filter(|s| s.name.as_deref() == Some(name))
            .collect())
    }

    async fn create(&self, specialty: &NewSpecialty) -> Result<Specialty, DomainError> {
        let mut specialties = self.specialties.write().unwrap();
        let created = Specialty {
            id: SpecialtyId(next_id(&specialties)),
            name: specialty.name.clone(),
        };
        specialties.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, specialty: &Specialty) -> Result<Specialty, DomainError> {
        let mut specialties = self.specialties.write().unwrap();
        match specialties.get_mut(&specialty.id) {
            Some(stored) => {
                *stored = specialty.clone();
                Ok(specialty.clone())
            }
            None => Err(DomainError::not_found(EntityKind::Specialty, specialty.id)),
        }
    }

    async fn delete(&self, id: &SpecialtyId) -> Result<(), DomainError> {
        self.specialties
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::Specialty, *id))
    }
}

// ============================================================================
// In-Memory Vet Repository
// ============================================================================

/// Stores vets with specialty ids only and fills in names from a shared
/// specialty catalog on read, like the join table does.
pub struct InMemoryVetRepository {
    vets: Arc<RwLock<HashMap<VetId, (Vet, Vec<SpecialtyId>)>>>,
    catalog: Arc<RwLock<HashMap<SpecialtyId, Specialty>>>,
}

impl InMemoryVetRepository {
    /// Share the specialty store of an in-memory specialty repository
    pub fn linked_to(specialties: &InMemorySpecialtyRepository) -> Self {
        Self {
            vets: Arc::default(),
            catalog: specialties.specialties.clone(),
        }
    }

    fn hydrate(&self, vet: &Vet, ids: &[SpecialtyId]) -> Vet {
        let catalog = self.catalog.read().unwrap();
        let mut vet = vet.clone();
        vet.assign_specialties(ids.iter().filter_map(|id| catalog.get(id).cloned()).collect());
        vet
    }

    fn all(&self) -> Vec<Vet> {
        let vets = self.vets.read().unwrap();
        sorted(&vets)
            .into_iter()
            .map(|(vet, ids)| self.hydrate(&vet, &ids))
            .collect()
    }
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn find_by_id(&self, id: &VetId) -> Result<Option<Vet>, DomainError> {
        let vets = self.vets.read().unwrap();
        Ok(vets.get(id).map(|(vet, ids)| self.hydrate(vet, ids)))
    }

    async fn find_all(&self) -> Result<Vec<Vet>, DomainError> {
        Ok(self.all())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Vet>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|v| v.last_name.as_deref() == Some(last_name))
            .collect())
    }

    async fn create(&self, vet: &NewVet) -> Result<Vet, DomainError> {
        let created = {
            let mut vets = self.vets.write().unwrap();
            let created = Vet {
                id: VetId(next_id(&vets)),
                first_name: vet.first_name.clone(),
                last_name: vet.last_name.clone(),
                specialties: Vec::new(),
            };
            vets.insert(created.id, (created.clone(), vet.specialty_ids.clone()));
            created
        };
        Ok(self.hydrate(&created, &vet.specialty_ids))
    }

    async fn update(&self, vet: &Vet) -> Result<Vet, DomainError> {
        let ids = vet.specialty_ids();
        {
            let mut vets = self.vets.write().unwrap();
            match vets.get_mut(&vet.id) {
                Some(stored) => *stored = (vet.clone(), ids.clone()),
                None => return Err(DomainError::not_found(EntityKind::Vet, vet.id)),
            }
        }
        Ok(self.hydrate(vet, &ids))
    }

    async fn delete(&self, id: &VetId) -> Result<(), DomainError> {
        self.vets
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::Vet, *id))
    }
}

// ============================================================================
// In-Memory Visit Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVisitRepository {
    visits: Arc<RwLock<HashMap<VisitId, Visit>>>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visit(self, visit: Visit) -> Self {
        self.visits.write().unwrap().insert(visit.id, visit);
        self
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn find_by_id(&self, id: &VisitId) -> Result<Option<Visit>, DomainError> {
        Ok(self.visits.read().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Visit>, DomainError> {
        Ok(sorted(&self.visits.read().unwrap()))
    }

    async fn find_by_visit_date(&self, date: NaiveDate) -> Result<Vec<Visit>, DomainError> {
        let visits = self.visits.read().unwrap();
        Ok(sorted(&visits)
            .into_iter()
            .filter(|v| v.visit_date == Some(date))
            .collect())
    }

    async fn find_by_pet(&self, pet_id: &PetId) -> Result<Vec<Visit>, DomainError> {
        let visits = self.visits.read().unwrap();
        Ok(sorted(&visits)
            .into_iter()
            .filter(|v| v.pet_id == *pet_id)
            .collect())
    }

    async fn create(&self, visit: &NewVisit) -> Result<Visit, DomainError> {
        let mut visits = self.visits.write().unwrap();
        let created = Visit {
            id: VisitId(next_id(&visits)),
            visit_date: visit.visit_date,
            description: visit.description.clone(),
            pet_id: visit.pet_id,
        };
        visits.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, visit: &Visit) -> Result<Visit, DomainError> {
        let mut visits = self.visits.write().unwrap();
        match visits.get_mut(&visit.id) {
            Some(stored) => {
                *stored = visit.clone();
                Ok(visit.clone())
            }
            None => Err(DomainError::not_found(EntityKind::Visit, visit.id)),
        }
    }

    async fn delete(&self, id: &VisitId) -> Result<(), DomainError> {
        self.visits
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::Visit, *id))
    }
}
