use crate::data::wallet::WalletRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_withdrawal;
mod get_transactions_for_user;
