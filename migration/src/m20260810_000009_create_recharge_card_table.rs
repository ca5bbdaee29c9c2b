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
                    .table(RechargeCard::Table)
                    .if_not_exists()
                    .col(pk_auto(RechargeCard::Id))
                    .col(string_uniq(RechargeCard::Code))
                    .col(double(RechargeCard::Amount))
                    .col(string(RechargeCard::Status))
                    .col(integer_null(RechargeCard::RedeemedBy))
                    .col(timestamp_null(RechargeCard::RedeemedAt))
                    .col(
                        timestamp(RechargeCard::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recharge_card_redeemed_by")
                            .from(RechargeCard::Table, RechargeCard::RedeemedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RechargeCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RechargeCard {
    Table,
    Id,
    Code,
    Amount,
    Status,
    RedeemedBy,
    RedeemedAt,
    CreatedAt,
}
