use crate::data::featured_ad::{
    CreateFeaturedAdParam, FeaturedAdRepository, UpdateFeaturedAdParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
