//! Application layer
//!
//! Existence-checked CRUD services over the repository ports, plus the
//! visit transport mapping.

pub mod owner_service;
pub mod pet_service;
pub mod pet_type_service;
pub mod specialty_service;
pub mod vet_service;
pub mod visit_dto;
pub mod visit_service;

pub use owner_service::OwnerService;
pub use pet_service::PetService;
pub use pet_type_service::PetTypeService;
pub use specialty_service::SpecialtyService;
pub use vet_service::VetService;
pub use visit_dto::{parse_visit_date, VisitDto};
pub use visit_service::VisitService;
