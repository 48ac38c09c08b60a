use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(pk_auto(Owners::Id))
                    .col(string_null(Owners::FirstName))
                    .col(string_null(Owners::LastName))
                    .col(string_null(Owners::Address))
                    .col(string_null(Owners::City))
                    .col(string_null(Owners::Telephone))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_owners_last_name")
                    .table(Owners::Table)
                    .col(Owners::LastName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owners::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Owners {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    City,
    Telephone,
}
