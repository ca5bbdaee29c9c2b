mod bid;
mod booking;
mod featured_ad;
mod user;
mod wallet;
