pub mod auction;
pub mod bid;
pub mod booking;
pub mod conversation;
pub mod featured_ad;
pub mod notification;
pub mod recharge_card;
pub mod user;
pub mod wallet;
pub mod yard;

#[cfg(test)]
mod test;
