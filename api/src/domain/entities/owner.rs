//! Owner domain entity
//!
//! A pet owner registered with the clinic.

use serde::Serialize;

entity_id!(
    /// Unique identifier for an owner
    OwnerId
);

/// A registered pet owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl Owner {
    /// Overwrite every mutable field, keeping the identifier
    pub fn update_from(&mut self, changes: NewOwner) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.address = changes.address;
        self.city = changes.city;
        self.telephone = changes.telephone;
    }
}

/// Data needed to create a new owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOwner {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}
