pub mod api;
pub mod auction;
pub mod booking;
pub mod featured_ad;
pub mod user;
pub mod wallet;
pub mod yard;
