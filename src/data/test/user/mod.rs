use crate::{
    data::user::{CreateUserParam, UserRepository},
    model::user::UserIdent,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod find_by_identifier;
mod set_status;
