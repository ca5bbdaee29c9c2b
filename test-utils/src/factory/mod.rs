//! Entity factories for seeding test data.
//!
//! Each module provides a factory struct with sensible defaults plus
//! `create_*` shorthands for the common case. Use `helpers` for building
//! entity graphs with their dependencies in one call.

pub mod auction;
pub mod bid;
pub mod booking;
pub mod car;
pub mod featured_ad;
pub mod helpers;
pub mod recharge_card;
pub mod user;
pub mod yard;
