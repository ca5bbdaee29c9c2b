//! SeaORM entities for the marketplace database.
//!
//! Each module defines one table: its `Model`, `ActiveModel`, relations, and
//! any typed status enums stored as strings. The `prelude` module re-exports
//! every `Entity` under its table name for concise query building.

pub mod prelude;

pub mod auction;
pub mod bid;
pub mod car;
pub mod conversation;
pub mod featured_ad;
pub mod notification;
pub mod recharge_card;
pub mod showroom;
pub mod transport_booking;
pub mod user;
pub mod wallet_transaction;
pub mod withdrawal;
pub mod yard;
