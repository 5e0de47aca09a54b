use super::*;

/// Tests the owner cancelling a pending order restores stock.
///
/// Verifies that a placed order's reservation is fully returned when its
/// owner cancels it.
///
/// Expected: Ok(Order) in Cancelled and stock back to its original value
#[tokio::test]
async fn owner_cancel_restores_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let owner = User::from_entity(factory::user::create_user(db).await?);
    let game = factory::game::GameFactory::new(db, admin.id)
        .stock(2)
        .build()
        .await?;

    let service = OrderService::new(db);
    let order = service
        .create(order_request(owner.id, &[game.id, game.id]))
        .await?;
    assert_eq!(stock_of(db, game.id).await, 0);

    let cancelled = service.cancel(order.id, &owner).await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(stock_of(db, game.id).await, 2);

    Ok(())
}

/// Tests only pending orders can be cancelled through the user route.
///
/// Expected: Err(BadRequest) quoting the current status, stock unchanged
#[tokio::test]
async fn rejects_cancelling_paid_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, game) = factory::create_game_with_creator(db).await?;
    let owner = factory::user::create_user(db).await?;
    let (order, _) = factory::order::OrderFactory::new(db, owner.id)
        .item(&game)
        .status(OrderStatus::Paid)
        .build()
        .await?;

    let result = OrderService::new(db)
        .cancel(order.id, &User::from_entity(admin))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "Cannot cancel order with status: Paid"
    ));
    assert_eq!(stock_of(db, game.id).await, game.stock);

    Ok(())
}

/// Tests another user cannot cancel someone else's order.
///
/// Expected: Err(Forbidden) and the order stays Pending
#[tokio::test]
async fn rejects_cancel_by_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game) = factory::create_game_with_creator(db).await?;
    let owner = factory::user::create_user(db).await?;
    let stranger = User::from_entity(factory::user::create_user(db).await?);
    let (order, _) = factory::order::OrderFactory::new(db, owner.id)
        .item(&game)
        .build()
        .await?;

    let result = OrderService::new(db).cancel(order.id, &stranger).await;

    assert!(matches!(
        result,
        Err(AppError::Forbidden(ref msg)) if msg == "Not authorized to cancel this order"
    ));

    let stored = Order::find_by_id(order.id).one(db).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);

    Ok(())
}

/// Tests cancelling an order whose game was deleted still succeeds.
///
/// Expected: Ok(Order) in Cancelled; the missing game is skipped
#[tokio::test]
async fn cancel_skips_deleted_games() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, game) = factory::create_game_with_creator(db).await?;
    let (order, _) = factory::order::OrderFactory::new(db, admin.id)
        .item(&game)
        .build()
        .await?;
    Game::delete_by_id(game.id).exec(db).await?;

    let cancelled = OrderService::new(db)
        .cancel(order.id, &User::from_entity(admin))
        .await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(cancelled.items.len(), 1);

    Ok(())
}
