use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_pets_table::Pets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visits::Table)
                    .if_not_exists()
                    .col(pk_auto(Visits::Id))
                    .col(integer(Visits::PetId))
                    .col(date_null(Visits::VisitDate))
                    .col(string_null(Visits::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visits_pet_id")
                            .from(Visits::Table, Visits::PetId)
                            .to(Pets::Table, Pets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visits_pet_id")
                    .table(Visits::Table)
                    .col(Visits::PetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Visits {
    Table,
    Id,
    PetId,
    VisitDate,
    Description,
}
