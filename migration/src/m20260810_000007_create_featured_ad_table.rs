use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeaturedAd::Table)
                    .if_not_exists()
                    .col(pk_auto(FeaturedAd::Id))
                    .col(string(FeaturedAd::ListingType))
                    .col(integer(FeaturedAd::ListingId))
                    .col(integer(FeaturedAd::Priority).default(0))
                    .col(timestamp(FeaturedAd::StartsAt))
                    .col(timestamp(FeaturedAd::ExpiresAt))
                    .col(boolean(FeaturedAd::Active).default(true))
                    .col(
                        timestamp(FeaturedAd::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeaturedAd::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeaturedAd {
    Table,
    Id,
    ListingType,
    ListingId,
    Priority,
    StartsAt,
    ExpiresAt,
    Active,
    CreatedAt,
}
