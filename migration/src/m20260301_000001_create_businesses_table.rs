use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Businesses::Table)
                    .if_not_exists()
                    .col(pk_auto(Businesses::BusinessId))
                    .col(integer(Businesses::OwnerId))
                    .col(string_len(Businesses::Name, 50))
                    .col(string_len(Businesses::StreetAddress, 100))
                    .col(string_len(Businesses::City, 50))
                    .col(string_len(Businesses::State, 2))
                    .col(integer(Businesses::ZipCode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Businesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Businesses {
    Table,
    BusinessId,
    OwnerId,
    Name,
    StreetAddress,
    City,
    State,
    ZipCode,
}
