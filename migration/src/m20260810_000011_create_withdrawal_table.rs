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
                    .table(Withdrawal::Table)
                    .if_not_exists()
                    .col(pk_auto(Withdrawal::Id))
                    .col(integer(Withdrawal::UserId))
                    .col(double(Withdrawal::Amount))
                    .col(string(Withdrawal::Status))
                    .col(integer_null(Withdrawal::ReviewedBy))
                    .col(timestamp_null(Withdrawal::ReviewedAt))
                    .col(string_null(Withdrawal::Note))
                    .col(
                        timestamp(Withdrawal::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_withdrawal_user_id")
                            .from(Withdrawal::Table, Withdrawal::UserId)
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
            .drop_table(Table::drop().table(Withdrawal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Withdrawal {
    Table,
    Id,
    UserId,
    Amount,
    Status,
    ReviewedBy,
    ReviewedAt,
    Note,
    CreatedAt,
}
