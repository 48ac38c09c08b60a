//! Domain entities
//!
//! Plain PetClinic records with typed identifiers.
//! These are separate from the SeaORM models in the `entity` module.

/// Defines an integer identifier newtype with `Display` and conversions.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub i32);

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod vet;
pub mod visit;

pub use owner::{NewOwner, Owner, OwnerId};
pub use pet::{Pet, PetId};
pub use pet_type::{NewPetType, PetType, PetTypeId};
pub use specialty::{NewSpecialty, Specialty, SpecialtyId};
pub use vet::{NewVet, Vet, VetId};
pub use visit::{NewVisit, Visit, VisitDraft, VisitId};

/// The kind of record an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Owner,
    Pet,
    PetType,
    Specialty,
    Vet,
    Visit,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Owner => write!(f, "Owner"),
            EntityKind::Pet => write!(f, "Pet"),
            EntityKind::PetType => write!(f, "PetType"),
            EntityKind::Specialty => write!(f, "Specialty"),
            EntityKind::Vet => write!(f, "Vet"),
            EntityKind::Visit => write!(f, "Visit"),
        }
    }
}
