//! Demo dataset for a fresh database.
//!
//! Rows are inserted without explicit ids so the datastore's own sequences
//! stay in step. Foreign keys below assume the ids a fresh database hands out
//! (1..n in insertion order).

use chrono::NaiveDate;
use sea_orm_migration::{prelude::*, sea_orm::ConnectionTrait};

use super::{
    m20250301_000001_create_owners_table::Owners, m20250301_000002_create_types_table::Types,
    m20250301_000003_create_pets_table::Pets,
    m20250301_000004_create_specialties_table::Specialties,
    m20250301_000005_create_vets_table::Vets,
    m20250301_000006_create_vet_specialties_table::VetSpecialties,
    m20250301_000007_create_visits_table::Visits,
};

const OWNERS: &[(&str, &str, &str, &str, &str)] = &[
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

const TYPES: &[&str] = &["cat", "dog", "lizard", "bird", "snake", "hamster"];

/// (name, birth date, type id, owner id)
const PETS: &[(&str, &str, i32, i32)] = &[
    ("Leo", "2010-09-07", 1, 1),
    ("Basil", "2012-08-06", 6, 2),
    ("Rosy", "2011-04-17", 2, 3),
    ("Jewel", "2010-03-07", 2, 3),
    ("Iggy", "2010-11-30", 3, 4),
    ("George", "2010-01-20", 5, 5),
    ("Samantha", "2012-09-04", 1, 6),
    ("Max", "2012-09-04", 1, 6),
    ("Lucky", "2011-08-06", 4, 7),
    ("Mulligan", "2007-02-24", 2, 8),
    ("Freddy", "2010-03-09", 4, 9),
    ("Lucky", "2010-06-24", 2, 10),
    ("Sly", "2012-06-08", 1, 10),
];

const SPECIALTIES: &[&str] = &["radiology", "surgery", "dentistry"];

const VETS: &[(&str, &str)] = &[
    ("James", "Carter"),
    ("Helen", "Leary"),
    ("Linda", "Douglas"),
    ("Rafael", "Ortega"),
    ("Henry", "Stevens"),
    ("Sharon", "Jenkins"),
];

/// (vet id, specialty id)
const VET_SPECIALTIES: &[(i32, i32)] = &[(2, 1), (3, 2), (3, 3), (4, 2), (5, 1)];

/// (pet id, visit date, description)
const VISITS: &[(i32, &str, &str)] = &[
    (7, "2010-03-04", "rabies shot"),
    (8, "2011-03-04", "rabies shot"),
    (8, "2009-06-04", "neutered"),
    (7, "2008-09-04", "spayed"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut owners = Query::insert();
        owners.into_table(Owners::Table).columns([
            Owners::FirstName,
            Owners::LastName,
            Owners::Address,
            Owners::City,
            Owners::Telephone,
        ]);
        for (first_name, last_name, address, city, telephone) in OWNERS {
            owners.values_panic([
                (*first_name).into(),
                (*last_name).into(),
                (*address).into(),
                (*city).into(),
                (*telephone).into(),
            ]);
        }
        exec(manager, &owners).await?;

        let mut types = Query::insert();
        types.into_table(Types::Table).columns([Types::Name]);
        for name in TYPES {
            types.values_panic([(*name).into()]);
        }
        exec(manager, &types).await?;

        let mut pets = Query::insert();
        pets.into_table(Pets::Table).columns([
            Pets::Name,
            Pets::BirthDate,
            Pets::TypeId,
            Pets::OwnerId,
        ]);
        for (name, birth_date, type_id, owner_id) in PETS {
            pets.values_panic([
                (*name).into(),
                parse_date(birth_date)?.into(),
                (*type_id).into(),
                (*owner_id).into(),
            ]);
        }
        exec(manager, &pets).await?;

        let mut specialties = Query::insert();
        specialties
            .into_table(Specialties::Table)
            .columns([Specialties::Name]);
        for name in SPECIALTIES {
            specialties.values_panic([(*name).into()]);
        }
        exec(manager, &specialties).await?;

        let mut vets = Query::insert();
        vets.into_table(Vets::Table)
            .columns([Vets::FirstName, Vets::LastName]);
        for (first_name, last_name) in VETS {
            vets.values_panic([(*first_name).into(), (*last_name).into()]);
        }
        exec(manager, &vets).await?;

        let mut vet_specialties = Query::insert();
        vet_specialties
            .into_table(VetSpecialties::Table)
            .columns([VetSpecialties::VetId, VetSpecialties::SpecialtyId]);
        for (vet_id, specialty_id) in VET_SPECIALTIES {
            vet_specialties.values_panic([(*vet_id).into(), (*specialty_id).into()]);
        }
        exec(manager, &vet_specialties).await?;

        let mut visits = Query::insert();
        visits.into_table(Visits::Table).columns([
            Visits::PetId,
            Visits::VisitDate,
            Visits::Description,
        ]);
        for (pet_id, visit_date, description) in VISITS {
            visits.values_panic([
                (*pet_id).into(),
                parse_date(visit_date)?.into(),
                (*description).into(),
            ]);
        }
        exec(manager, &visits).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first so foreign keys never dangle.
        delete_all(manager, Visits::Table).await?;
        delete_all(manager, VetSpecialties::Table).await?;
        delete_all(manager, Vets::Table).await?;
        delete_all(manager, Specialties::Table).await?;
        delete_all(manager, Pets::Table).await?;
        delete_all(manager, Types::Table).await?;
        delete_all(manager, Owners::Table).await?;

        Ok(())
    }
}

async fn exec(manager: &SchemaManager<'_>, stmt: &InsertStatement) -> Result<(), DbErr> {
    let db = manager.get_connection();
    db.execute(manager.get_database_backend().build(stmt))
        .await?;
    Ok(())
}

async fn delete_all<T>(manager: &SchemaManager<'_>, table: T) -> Result<(), DbErr>
where
    T: Iden + 'static,
{
    let stmt = Query::delete().from_table(table).to_owned();
    manager
        .get_connection()
        .execute(manager.get_database_backend().build(&stmt))
        .await?;
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, DbErr> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| DbErr::Custom(format!("invalid seed date {}: {}", value, e)))
}
