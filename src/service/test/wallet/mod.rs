use crate::{error::AppError, service::wallet::WalletService};
use entity::prelude::User;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod generate_cards;
mod request_withdrawal;
mod review_withdrawal;
