//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Each collection exposes
//! list, get, create, update and delete.

pub mod owners;
pub mod pet_types;
pub mod specialties;
pub mod vets;
pub mod visits;

pub use owners::{create_owner, delete_owner, get_owner, list_owners, update_owner};
pub use pet_types::{
    create_pet_type, delete_pet_type, get_pet_type, list_pet_types, update_pet_type,
};
pub use specialties::{
    create_specialty, delete_specialty, get_specialty, list_specialties, update_specialty,
};
pub use vets::{create_vet, delete_vet, get_vet, list_vets, update_vet};
pub use visits::{create_visit, delete_visit, get_visit, list_visits, update_visit};

/// Body returned by every successful DELETE
pub(crate) fn deleted_message(id: i32) -> String {
    format!("Delete ID: {}", id)
}
