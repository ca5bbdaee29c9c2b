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
                    .table(Showroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Showroom::Id))
                    .col(integer(Showroom::OwnerId))
                    .col(string(Showroom::Name))
                    .col(string(Showroom::City))
                    .col(
                        timestamp(Showroom::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showroom_owner_id")
                            .from(Showroom::Table, Showroom::OwnerId)
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
            .drop_table(Table::drop().table(Showroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Showroom {
    Table,
    Id,
    OwnerId,
    Name,
    City,
    CreatedAt,
}
