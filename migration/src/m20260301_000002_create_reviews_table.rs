use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_businesses_table::Businesses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::ReviewId))
                    .col(integer(Reviews::UserId))
                    .col(integer(Reviews::BusinessId))
                    .col(integer(Reviews::Stars))
                    .col(string_len_null(Reviews::ReviewText, 1000))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_business_id")
                            .from(Reviews::Table, Reviews::BusinessId)
                            .to(Businesses::Table, Businesses::BusinessId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    ReviewId,
    UserId,
    BusinessId,
    Stars,
    ReviewText,
}
