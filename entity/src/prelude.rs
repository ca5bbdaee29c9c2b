pub use super::auction::Entity as Auction;
pub use super::bid::Entity as Bid;
pub use super::car::Entity as Car;
pub use super::conversation::Entity as Conversation;
pub use super::featured_ad::Entity as FeaturedAd;
pub use super::notification::Entity as Notification;
pub use super::recharge_card::Entity as RechargeCard;
pub use super::showroom::Entity as Showroom;
pub use super::transport_booking::Entity as TransportBooking;
pub use super::user::Entity as User;
pub use super::wallet_transaction::Entity as WalletTransaction;
pub use super::withdrawal::Entity as Withdrawal;
pub use super::yard::Entity as Yard;
