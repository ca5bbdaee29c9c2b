//! Admin-only handlers.

pub mod booking;
pub mod featured_ad;
pub mod recharge_card;
pub mod user;
pub mod withdrawal;
