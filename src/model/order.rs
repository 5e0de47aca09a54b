use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

/// One requested line item. Extra client-side fields (title, price) are ignored;
/// the server snapshots them from the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OrderItemRequestDto {
    pub game: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateOrderDto {
    pub games: Option<Vec<OrderItemRequestDto>>,
    pub payment_method: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderItemDto {
    pub game: i32,
    pub title: String,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user: Option<UserSummaryDto>,
    pub games: Vec<OrderItemDto>,
    pub total: f64,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
