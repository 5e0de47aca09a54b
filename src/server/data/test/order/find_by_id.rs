use super::*;

/// Tests loading an order with items and buyer.
///
/// Expected: Ok(Some) with buyer populated and items attached
#[tokio::test]
async fn loads_items_and_buyer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let buyer = UserFactory::new(db).name("Buyer").build().await?;
    let game = GameFactory::new(db, admin.id).build().await?;
    let (created, _) = OrderFactory::new(db, buyer.id)
        .item(&game)
        .item(&game)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .find_by_id(created.id)
        .await?
        .expect("order should exist");

    assert_eq!(order.user_id, buyer.id);
    assert_eq!(order.buyer.unwrap().name, "Buyer");
    assert_eq!(order.items.len(), 2);
    assert!(order.items.iter().all(|i| i.game_id == game.id));

    Ok(())
}

/// Tests that order history survives deletion of the game.
///
/// Expected: Ok(Some) with the snapshot title still present
#[tokio::test]
async fn keeps_items_after_game_deletion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let game = GameFactory::new(db, admin.id).title("Gone").build().await?;
    let (created, _) = OrderFactory::new(db, admin.id).item(&game).build().await?;

    crate::server::data::game::GameRepository::new(db)
        .delete(game.id)
        .await?;

    let order = OrderRepository::new(db)
        .find_by_id(created.id)
        .await?
        .expect("order should exist");

    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].title, "Gone");

    Ok(())
}

/// Tests loading a missing order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    assert!(repo.find_by_id(1).await?.is_none());

    Ok(())
}
