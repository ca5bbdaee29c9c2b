pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_yard_table;
mod m20260810_000003_create_showroom_table;
mod m20260810_000004_create_car_table;
mod m20260810_000005_create_auction_table;
mod m20260810_000006_create_bid_table;
mod m20260810_000007_create_featured_ad_table;
mod m20260810_000008_create_transport_booking_table;
mod m20260810_000009_create_recharge_card_table;
mod m20260810_000010_create_wallet_transaction_table;
mod m20260810_000011_create_withdrawal_table;
mod m20260810_000012_create_notification_table;
mod m20260810_000013_create_conversation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_yard_table::Migration),
            Box::new(m20260810_000003_create_showroom_table::Migration),
            Box::new(m20260810_000004_create_car_table::Migration),
            Box::new(m20260810_000005_create_auction_table::Migration),
            Box::new(m20260810_000006_create_bid_table::Migration),
            Box::new(m20260810_000007_create_featured_ad_table::Migration),
            Box::new(m20260810_000008_create_transport_booking_table::Migration),
            Box::new(m20260810_000009_create_recharge_card_table::Migration),
            Box::new(m20260810_000010_create_wallet_transaction_table::Migration),
            Box::new(m20260810_000011_create_withdrawal_table::Migration),
            Box::new(m20260810_000012_create_notification_table::Migration),
            Box::new(m20260810_000013_create_conversation_table::Migration),
        ]
    }
}
