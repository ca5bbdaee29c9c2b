use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_yard_table::Yard,
    m20260810_000004_create_car_table::Car,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(pk_auto(Auction::Id))
                    .col(integer(Auction::SellerId))
                    .col(integer(Auction::CarId))
                    .col(integer_null(Auction::YardId))
                    .col(string(Auction::Status))
                    .col(double(Auction::StartingPrice))
                    .col(double(Auction::CurrentPrice))
                    .col(integer_null(Auction::HighestBidderId))
                    .col(timestamp(Auction::StartDate))
                    .col(timestamp(Auction::EndDate))
                    .col(
                        timestamp(Auction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_seller_id")
                            .from(Auction::Table, Auction::SellerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_car_id")
                            .from(Auction::Table, Auction::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_yard_id")
                            .from(Auction::Table, Auction::YardId)
                            .to(Yard::Table, Yard::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Auction {
    Table,
    Id,
    SellerId,
    CarId,
    YardId,
    Status,
    StartingPrice,
    CurrentPrice,
    HighestBidderId,
    StartDate,
    EndDate,
    CreatedAt,
}
