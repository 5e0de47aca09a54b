use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod admin_exists;
mod create;
mod find_credentials_by_email;
mod get_all_paginated;
mod set_role;
mod update;
