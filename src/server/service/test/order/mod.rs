use entity::{order::OrderStatus, prelude::*};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    model::order::{CreateOrderDto, OrderItemRequestDto, UpdateOrderStatusDto},
    server::{
        error::AppError,
        model::{
            order::{CreateOrderParam, UpdateOrderStatusParam},
            user::User,
        },
        service::order::OrderService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod create;
mod update_status;

/// Builds a placement request listing each game id once per unit.
fn order_request(user_id: i32, game_ids: &[i32]) -> CreateOrderParam {
    CreateOrderParam::from_dto(
        CreateOrderDto {
            games: Some(
                game_ids
                    .iter()
                    .map(|id| OrderItemRequestDto { game: *id })
                    .collect(),
            ),
            payment_method: None,
        },
        user_id,
    )
    .unwrap()
}

fn status_request(order_id: i32, status: &str) -> UpdateOrderStatusParam {
    UpdateOrderStatusParam::from_dto(
        UpdateOrderStatusDto {
            status: Some(status.to_string()),
        },
        order_id,
    )
    .unwrap()
}

async fn stock_of(db: &sea_orm::DatabaseConnection, game_id: i32) -> i32 {
    Game::find_by_id(game_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .stock
}
