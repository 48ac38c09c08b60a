use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_owners_table::Owners, m20250301_000002_create_types_table::Types,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(pk_auto(Pets::Id))
                    .col(string_null(Pets::Name))
                    .col(date_null(Pets::BirthDate))
                    .col(integer(Pets::TypeId))
                    .col(integer(Pets::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pets_type_id")
                            .from(Pets::Table, Pets::TypeId)
                            .to(Types::Table, Types::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pets_owner_id")
                            .from(Pets::Table, Pets::OwnerId)
                            .to(Owners::Table, Owners::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pets {
    Table,
    Id,
    Name,
    BirthDate,
    TypeId,
    OwnerId,
}
