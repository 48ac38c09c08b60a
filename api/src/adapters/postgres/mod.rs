//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM. The same adapters run
//! against SQLite in the HTTP tests.

pub mod owner_repo;
pub mod pet_repo;
pub mod pet_type_repo;
pub mod specialty_repo;
pub mod vet_repo;
pub mod visit_repo;


pub use owner_repo::PostgresOwnerRepository;
pub use pet_repo::PostgresPetRepository;
pub use pet_type_repo::PostgresPetTypeRepository;
pub use specialty_repo::PostgresSpecialtyRepository;
pub use vet_repo::PostgresVetRepository;
pub use visit_repo::PostgresVisitRepository;

use sea_orm::DbErr;

use crate::domain::entities::EntityKind;
use crate::error::DomainError;

/// An update that touched no row means the record does not exist
fn map_update_err(e: DbErr, kind: EntityKind, id: i32) -> DomainError {
    match e {
        DbErr::RecordNotUpdated => DomainError::not_found(kind, id),
        e => DomainError::Database(e.to_string()),
    }
}
