use crate::data::booking::BookingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod set_status;
