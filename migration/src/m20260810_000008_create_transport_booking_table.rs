use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(TransportBooking::Id))
                    .col(integer(TransportBooking::CustomerId))
                    .col(string(TransportBooking::Pickup))
                    .col(string(TransportBooking::Dropoff))
                    .col(string(TransportBooking::Status))
                    .col(double_null(TransportBooking::Price))
                    .col(timestamp(TransportBooking::ScheduledAt))
                    .col(
                        timestamp(TransportBooking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transport_booking_customer_id")
                            .from(TransportBooking::Table, TransportBooking::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransportBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransportBooking {
    Table,
    Id,
    CustomerId,
    Pickup,
    Dropoff,
    Status,
    Price,
    ScheduledAt,
    CreatedAt,
}
