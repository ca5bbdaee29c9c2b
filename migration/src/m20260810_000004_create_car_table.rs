use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_yard_table::Yard,
    m20260810_000003_create_showroom_table::Showroom,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(integer(Car::SellerId))
                    .col(string(Car::Make))
                    .col(string(Car::Model))
                    .col(integer(Car::Year))
                    .col(double(Car::Price))
                    .col(string(Car::Status))
                    .col(integer_null(Car::YardId))
                    .col(integer_null(Car::ShowroomId))
                    .col(
                        timestamp(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_seller_id")
                            .from(Car::Table, Car::SellerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_yard_id")
                            .from(Car::Table, Car::YardId)
                            .to(Yard::Table, Yard::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_showroom_id")
                            .from(Car::Table, Car::ShowroomId)
                            .to(Showroom::Table, Showroom::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    SellerId,
    Make,
    Model,
    Year,
    Price,
    Status,
    YardId,
    ShowroomId,
    CreatedAt,
}
