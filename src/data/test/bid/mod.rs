use crate::data::bid::BidRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_auction;
mod has_bid_from;
