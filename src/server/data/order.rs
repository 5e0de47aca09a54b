//! Order repository.
//!
//! Provides `OrderRepository` for writing orders with their line items, loading them back
//! with items and buyers, and applying status changes guarded by the expected current status.

use std::collections::HashMap;

use chrono::Utc;
use entity::order::OrderStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::order::{NewOrder, Order};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order and its line items.
    ///
    /// Callers run this inside the same transaction that reserved stock for the items.
    ///
    /// # Arguments
    /// - `order` - Buyer, snapshot items, total, and payment method
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order, without buyer populated
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, order: NewOrder) -> Result<Order, DbErr> {
        let now = Utc::now();
        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(order.user_id),
            total: ActiveValue::Set(order.total),
            status: ActiveValue::Set(OrderStatus::Pending),
            payment_method: ActiveValue::Set(order.payment_method),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(entity.id),
                game_id: ActiveValue::Set(item.game_id),
                title: ActiveValue::Set(item.title),
                price: ActiveValue::Set(item.price),
                image: ActiveValue::Set(item.image),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok(Order::from_entity(entity, items, None))
    }

    /// Finds an order by id with its items and buyer.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some((order, buyer)) = entity::prelude::Order::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut items = self.items_by_order(&[order.id]).await?;
        let items = items.remove(&order.id).unwrap_or_default();

        Ok(Some(Order::from_entity(order, items, buyer)))
    }

    /// Gets the orders placed by one user with the buyer attached, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = orders.iter().map(|(o, _)| o.id).collect();
        let mut items = self.items_by_order(&ids).await?;

        Ok(orders
            .into_iter()
            .map(|(order, buyer)| {
                let order_items = items.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, order_items, buyer)
            })
            .collect())
    }

    /// Gets every order with its buyer, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = orders.iter().map(|(o, _)| o.id).collect();
        let mut items = self.items_by_order(&ids).await?;

        Ok(orders
            .into_iter()
            .map(|(order, buyer)| {
                let order_items = items.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, order_items, buyer)
            })
            .collect())
    }

    /// Moves an order from `from` to `to` if it is still in `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Order missing or no longer in `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status_if(
        &self,
        id: i32,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(to))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Loads line items for the given orders grouped by order id, in insertion order.
    async fn items_by_order(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::order_item::Model>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }

        Ok(grouped)
    }
}
