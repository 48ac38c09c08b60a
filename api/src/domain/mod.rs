//! Domain layer
//!
//! Contains the PetClinic records and the ports they are persisted through.
//! - `entities`: Domain models (owners, pets, vets, visits, ...)
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
