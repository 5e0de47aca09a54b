//! Order domain models, status transitions, and parameters.

use chrono::{DateTime, Utc};
use entity::order::{OrderStatus, PaymentMethod};
use sea_orm::ActiveEnum;

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto, UpdateOrderStatusDto},
    server::{error::AppError, model::user::User},
};

/// Line item snapshot taken from the catalog at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub game_id: i32,
    pub title: String,
    pub price: f64,
    pub image: Option<String>,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            game_id: entity.game_id,
            title: entity.title,
            price: entity.price,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            game: self.game_id,
            title: self.title,
            price: self.price,
            image: self.image,
        }
    }
}

/// Order with its line items and, when joined, the buyer.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub buyer: Option<User>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
        buyer: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            buyer: buyer.map(User::from_entity),
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            total: entity.total,
            status: entity.status,
            payment_method: entity.payment_method,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether `user` may view or cancel this order.
    pub fn is_accessible_by(&self, user: &User) -> bool {
        self.user_id == user.id || user.is_admin()
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user: self.buyer.map(User::into_summary_dto),
            games: self.items.into_iter().map(OrderItem::into_dto).collect(),
            total: self.total,
            status: self.status.to_value(),
            payment_method: self.payment_method.to_value(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Transition table shared by the admin status route and the owner cancel route.
pub trait OrderStatusExt {
    /// Whether an order may move from `self` to `next`. Staying in place is not a transition.
    /// `Delivered` and `Cancelled` accept no further transitions.
    fn can_transition_to(self, next: OrderStatus) -> bool;
}

impl OrderStatusExt for OrderStatus {
    fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        matches!(
            (self, next),
            (Pending, Paid)
                | (Pending, Delivered)
                | (Pending, Cancelled)
                | (Paid, Delivered)
                | (Paid, Cancelled)
        )
    }
}

/// Validated order placement request.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub user_id: i32,
    /// One entry per unit requested; a game listed twice consumes two units of stock.
    pub game_ids: Vec<i32>,
    pub payment_method: PaymentMethod,
}

impl CreateOrderParam {
    pub fn from_dto(dto: CreateOrderDto, user_id: i32) -> Result<Self, AppError> {
        let game_ids: Vec<i32> = dto
            .games
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.game)
            .collect();

        if game_ids.is_empty() {
            return Err(AppError::BadRequest("No games in order".to_string()));
        }

        let payment_method = match dto.payment_method {
            Some(value) if !value.trim().is_empty() => parse_payment_method(&value)?,
            _ => PaymentMethod::Cod,
        };

        Ok(Self {
            user_id,
            game_ids,
            payment_method,
        })
    }
}

/// Row values for a new order and its items, computed inside the placement transaction.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub payment_method: PaymentMethod,
}

impl NewOrder {
    /// Builds the order rows, summing the snapshot prices into the total.
    pub fn new(user_id: i32, items: Vec<OrderItem>, payment_method: PaymentMethod) -> Self {
        let total = items.iter().map(|item| item.price).sum();

        Self {
            user_id,
            items,
            total,
            payment_method,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOrderStatusParam {
    pub order_id: i32,
    pub status: OrderStatus,
}

impl UpdateOrderStatusParam {
    pub fn from_dto(dto: UpdateOrderStatusDto, order_id: i32) -> Result<Self, AppError> {
        let Some(status) = dto.status.filter(|v| !v.trim().is_empty()) else {
            return Err(AppError::BadRequest(
                "Please provide order status".to_string(),
            ));
        };

        Ok(Self {
            order_id,
            status: parse_status(&status)?,
        })
    }
}

pub fn parse_status(value: &str) -> Result<OrderStatus, AppError> {
    OrderStatus::try_from_value(&value.trim().to_string())
        .map_err(|_| AppError::BadRequest("Invalid status value".to_string()))
}

pub fn parse_payment_method(value: &str) -> Result<PaymentMethod, AppError> {
    PaymentMethod::try_from_value(&value.trim().to_string())
        .map_err(|_| AppError::BadRequest(format!("{} is not a valid payment method", value)))
}
