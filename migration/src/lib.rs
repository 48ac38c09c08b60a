pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_owners_table;
mod m20250301_000002_create_types_table;
mod m20250301_000003_create_pets_table;
mod m20250301_000004_create_specialties_table;
mod m20250301_000005_create_vets_table;
mod m20250301_000006_create_vet_specialties_table;
mod m20250301_000007_create_visits_table;
mod m20250301_000008_seed_demo_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_owners_table::Migration),
            Box::new(m20250301_000002_create_types_table::Migration),
            Box::new(m20250301_000003_create_pets_table::Migration),
            Box::new(m20250301_000004_create_specialties_table::Migration),
            Box::new(m20250301_000005_create_vets_table::Migration),
            Box::new(m20250301_000006_create_vet_specialties_table::Migration),
            Box::new(m20250301_000007_create_visits_table::Migration),
            Box::new(m20250301_000008_seed_demo_data::Migration),
        ]
    }
}
