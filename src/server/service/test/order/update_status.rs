use super::*;

/// Tests an admin can move a pending order to paid and then delivered.
///
/// Expected: Ok(Order) with the new status after each step, stock untouched
#[tokio::test]
async fn follows_transition_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, game) = factory::create_game_with_creator(db).await?;
    let (order, _) = factory::order::OrderFactory::new(db, admin.id)
        .item(&game)
        .build()
        .await?;

    let service = OrderService::new(db);
    let paid = service.update_status(status_request(order.id, "Paid")).await?;
    assert_eq!(paid.status, OrderStatus::Paid);

    let delivered = service
        .update_status(status_request(order.id, "Delivered"))
        .await?;
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(stock_of(db, game.id).await, game.stock);

    Ok(())
}

/// Tests a delivered order cannot be moved back to pending.
///
/// Expected: Err(BadRequest) and the order stays Delivered
#[tokio::test]
async fn rejects_delivered_to_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, game) = factory::create_game_with_creator(db).await?;
    let (order, _) = factory::order::OrderFactory::new(db, admin.id)
        .item(&game)
        .status(OrderStatus::Delivered)
        .build()
        .await?;

    let result = OrderService::new(db)
        .update_status(status_request(order.id, "Pending"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "Cannot change order status from Delivered to Pending"
    ));

    let stored = Order::find_by_id(order.id).one(db).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Delivered);

    Ok(())
}

/// Tests setting an order to its current status is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_no_op_transition() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, game) = factory::create_game_with_creator(db).await?;
    let (order, _) = factory::order::OrderFactory::new(db, admin.id)
        .item(&game)
        .build()
        .await?;

    let result = OrderService::new(db)
        .update_status(status_request(order.id, "Pending"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an admin cancelling a paid order returns its stock.
///
/// Expected: Ok(Order) in Cancelled and one unit restored per line item
#[tokio::test]
async fn admin_cancel_restores_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, game) = factory::create_game_with_creator(db).await?;
    let (order, _) = factory::order::OrderFactory::new(db, admin.id)
        .item(&game)
        .item(&game)
        .status(OrderStatus::Paid)
        .build()
        .await?;

    let cancelled = OrderService::new(db)
        .update_status(status_request(order.id, "Cancelled"))
        .await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(stock_of(db, game.id).await, game.stock + 2);

    Ok(())
}

/// Tests updating a missing order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db)
        .update_status(status_request(404, "Paid"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Order not found"));

    Ok(())
}
