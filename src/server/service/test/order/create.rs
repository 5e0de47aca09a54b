use super::*;

/// Tests placing an order snapshots items, totals prices, and takes stock.
///
/// Expected: Ok(Order) in Pending with COD payment, total equal to the sum of
/// snapshot prices, and one unit taken per line item
#[tokio::test]
async fn places_order_and_takes_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let buyer = factory::user::create_user(db).await?;
    let celeste = factory::game::GameFactory::new(db, admin.id)
        .title("Celeste")
        .price(19.99)
        .stock(3)
        .build()
        .await?;
    let hades = factory::game::GameFactory::new(db, admin.id)
        .title("Hades")
        .price(24.5)
        .stock(1)
        .build()
        .await?;

    let order = OrderService::new(db)
        .create(order_request(buyer.id, &[celeste.id, hades.id]))
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.user_id, buyer.id);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].title, "Celeste");
    assert!((order.total - 44.49).abs() < 1e-9);
    assert_eq!(order.buyer.as_ref().map(|b| b.id), Some(buyer.id));
    assert_eq!(stock_of(db, celeste.id).await, 2);
    assert_eq!(stock_of(db, hades.id).await, 0);

    Ok(())
}

/// Tests two copies of a one-stock game cannot both be reserved.
///
/// Verifies the whole placement rolls back: the first unit taken is returned
/// and no order or item rows remain.
///
/// Expected: Err(BadRequest) naming the game, stock still 1, no order rows
#[tokio::test]
async fn rolls_back_when_second_copy_is_out_of_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let buyer = factory::user::create_user(db).await?;
    let game = factory::game::GameFactory::new(db, admin.id)
        .title("Outer Wilds")
        .stock(1)
        .build()
        .await?;

    let result = OrderService::new(db)
        .create(order_request(buyer.id, &[game.id, game.id]))
        .await;

    assert!(
        matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "\"Outer Wilds\" is out of stock")
    );
    assert_eq!(stock_of(db, game.id).await, 1);
    assert_eq!(Order::find().count(db).await?, 0);
    assert_eq!(OrderItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests an unknown game aborts placement after earlier items were reserved.
///
/// Expected: Err(NotFound) and the earlier item's stock unchanged
#[tokio::test]
async fn rejects_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let game = factory::game::GameFactory::new(db, admin.id)
        .stock(5)
        .build()
        .await?;

    let result = OrderService::new(db)
        .create(order_request(admin.id, &[game.id, 9999]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Game 9999 not found"));
    assert_eq!(stock_of(db, game.id).await, 5);
    assert_eq!(Order::find().count(db).await?, 0);

    Ok(())
}

/// Tests an order can be viewed by its owner and an admin but nobody else.
///
/// Expected: Ok for owner and admin, Err(Forbidden) for another user
#[tokio::test]
async fn restricts_order_visibility() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(
        factory::user::UserFactory::new(db).admin(true).build().await?,
    );
    let owner = User::from_entity(factory::user::create_user(db).await?);
    let stranger = User::from_entity(factory::user::create_user(db).await?);
    let game = factory::game::create_game(db, admin.id).await?;

    let service = OrderService::new(db);
    let order = service.create(order_request(owner.id, &[game.id])).await?;

    assert!(service.get_by_id(order.id, &owner).await.is_ok());
    assert!(service.get_by_id(order.id, &admin).await.is_ok());
    assert!(matches!(
        service.get_by_id(order.id, &stranger).await,
        Err(AppError::Forbidden(_))
    ));

    Ok(())
}
