pub mod auth;
pub mod booking;
pub mod cache;
pub mod conversation;
pub mod featured_ad;
pub mod notification;
pub mod sale;
pub mod user;
pub mod wallet;
pub mod yard;
