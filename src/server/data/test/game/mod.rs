use crate::server::{
    data::game::GameRepository,
    model::game::{CreateGameParam, UpdateGameParam},
};
use chrono::{Duration, Utc};
use entity::game::Genre;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{game::GameFactory, user::UserFactory},
};

mod create;
mod delete;
mod get_all;
mod search;
mod update;
