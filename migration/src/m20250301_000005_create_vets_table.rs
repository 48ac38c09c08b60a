use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vets::Table)
                    .if_not_exists()
                    .col(pk_auto(Vets::Id))
                    .col(string_null(Vets::FirstName))
                    .col(string_null(Vets::LastName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vets {
    Table,
    Id,
    FirstName,
    LastName,
}
