//! SeaORM models, one module per table

pub mod owners;
pub mod pets;
pub mod specialties;
pub mod types;
pub mod vet_specialties;
pub mod vets;
pub mod visits;
