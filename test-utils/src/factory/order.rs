//! Order factory for creating orders with line items.
//!
//! Orders are written directly without touching game stock, so tests can set up any
//! status or history they need.

use chrono::{DateTime, Utc};
use entity::order::{OrderStatus, PaymentMethod};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// # Example
///
/// ```rust,ignore
/// let (order, items) = OrderFactory::new(&db, user.id)
///     .item(&game)
///     .status(OrderStatus::Paid)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    items: Vec<(i32, String, f64, Option<String>)>,
    status: OrderStatus,
    payment_method: PaymentMethod,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for `user_id`.
    ///
    /// Defaults to a pending COD order with no items, created now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            items: Vec::new(),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cod,
            created_at: Utc::now(),
        }
    }

    /// Adds a line item snapshotting `game`.
    pub fn item(mut self, game: &entity::game::Model) -> Self {
        self.items.push((
            game.id,
            game.title.clone(),
            game.price,
            Some(game.image.clone()),
        ));
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the order and its items. The total is the sum of item prices.
    ///
    /// # Returns
    /// - `Ok((order, items))` - Created order and line item entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
        let total: f64 = self.items.iter().map(|(_, _, price, _)| price).sum();

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            total: ActiveValue::Set(total),
            status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(self.payment_method),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (game_id, title, price, image) in self.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                game_id: ActiveValue::Set(game_id),
                title: ActiveValue::Set(title),
                price: ActiveValue::Set(price),
                image: ActiveValue::Set(image),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok((order, items))
    }
}
