//! Order placement, lookup, and status management.
//!
//! Placement and every status change that returns stock run inside one database
//! transaction, so stock and order rows either change together or not at all.

use entity::order::OrderStatus;
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, order::OrderRepository},
    error::AppError,
    model::{
        order::{
            CreateOrderParam, NewOrder, Order, OrderItem, OrderStatusExt, UpdateOrderStatusParam,
        },
        user::User,
    },
};

const ORDER_NOT_FOUND: &str = "Order not found";

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order, reserving one unit of stock per requested item.
    ///
    /// Items are snapshotted from the catalog and the total is computed from those
    /// snapshots. A game listed twice reserves two units.
    ///
    /// # Arguments
    /// - `param` - Buyer, requested game ids, and payment method
    ///
    /// # Returns
    /// - `Ok(Order)` - The placed order with buyer populated
    /// - `Err(AppError::NotFound)` - A requested game does not exist
    /// - `Err(AppError::BadRequest)` - A requested game ran out of stock
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let game_repo = GameRepository::new(&txn);

        let mut items = Vec::with_capacity(param.game_ids.len());
        for game_id in param.game_ids {
            let Some(game) = game_repo.find_by_id(game_id).await? else {
                return Err(AppError::NotFound(format!("Game {} not found", game_id)));
            };

            if !game_repo.take_one(game.id).await? {
                return Err(AppError::BadRequest(format!(
                    "\"{}\" is out of stock",
                    game.title
                )));
            }

            items.push(OrderItem {
                game_id: game.id,
                title: game.title,
                price: game.price,
                image: Some(game.image),
            });
        }

        let order = OrderRepository::new(&txn)
            .create(NewOrder::new(param.user_id, items, param.payment_method))
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Order {} placed by user {} for {:.2}",
            order.id,
            order.user_id,
            order.total
        );

        self.reload(order.id).await
    }

    /// Gets the orders of one user, newest first.
    pub async fn get_my_orders(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Gets one order, visible only to its owner or an admin.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order with items and buyer
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::Forbidden)` - `viewer` neither owns the order nor is an admin
    pub async fn get_by_id(&self, id: i32, viewer: &User) -> Result<Order, AppError> {
        let order = self.reload(id).await?;

        if !order.is_accessible_by(viewer) {
            return Err(AppError::Forbidden(
                "Not authorized to view this order".to_string(),
            ));
        }

        Ok(order)
    }

    /// Gets every order, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_all().await?)
    }

    /// Moves an order to a new status following the transition table.
    ///
    /// Moving to `Cancelled` returns one unit of stock per line item.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the current status
    pub async fn update_status(&self, param: UpdateOrderStatusParam) -> Result<Order, AppError> {
        let order = self.reload(param.order_id).await?;

        if !order.status.can_transition_to(param.status) {
            return Err(illegal_transition(order.status, param.status));
        }

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        if !order_repo
            .set_status_if(order.id, order.status, param.status)
            .await?
        {
            let current = current_status(&order_repo, order.id).await?;
            return Err(illegal_transition(current, param.status));
        }

        if param.status == OrderStatus::Cancelled {
            restore_stock(&txn, &order.items).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Order {} moved from {} to {}",
            order.id,
            order.status.to_value(),
            param.status.to_value()
        );

        self.reload(order.id).await
    }

    /// Cancels a pending order on behalf of its owner or an admin and returns its stock.
    ///
    /// # Returns
    /// - `Ok(Order)` - The cancelled order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::Forbidden)` - `actor` neither owns the order nor is an admin
    /// - `Err(AppError::BadRequest)` - Order is no longer pending
    pub async fn cancel(&self, id: i32, actor: &User) -> Result<Order, AppError> {
        let order = self.reload(id).await?;

        if !order.is_accessible_by(actor) {
            return Err(AppError::Forbidden(
                "Not authorized to cancel this order".to_string(),
            ));
        }

        if order.status != OrderStatus::Pending {
            return Err(cannot_cancel(order.status));
        }

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        if !order_repo
            .set_status_if(order.id, OrderStatus::Pending, OrderStatus::Cancelled)
            .await?
        {
            let current = current_status(&order_repo, order.id).await?;
            return Err(cannot_cancel(current));
        }

        restore_stock(&txn, &order.items).await?;

        txn.commit().await?;

        tracing::info!("Order {} cancelled by user {}", order.id, actor.id);

        self.reload(order.id).await
    }

    async fn reload(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.to_string()))
    }
}

/// Returns one unit of stock per line item. Items of deleted games are skipped.
async fn restore_stock<C: ConnectionTrait>(db: &C, items: &[OrderItem]) -> Result<(), AppError> {
    let game_repo = GameRepository::new(db);
    for item in items {
        game_repo.adjust_stock(item.game_id, 1).await?;
    }
    Ok(())
}

/// Reads the status an order holds after a guarded write found it changed.
async fn current_status<C: ConnectionTrait>(
    order_repo: &OrderRepository<'_, C>,
    id: i32,
) -> Result<OrderStatus, AppError> {
    order_repo
        .find_by_id(id)
        .await?
        .map(|order| order.status)
        .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.to_string()))
}

fn illegal_transition(from: OrderStatus, to: OrderStatus) -> AppError {
    AppError::BadRequest(format!(
        "Cannot change order status from {} to {}",
        from.to_value(),
        to.to_value()
    ))
}

fn cannot_cancel(status: OrderStatus) -> AppError {
    AppError::BadRequest(format!(
        "Cannot cancel order with status: {}",
        status.to_value()
    ))
}
