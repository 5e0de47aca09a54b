use super::*;

/// Tests that only the user's own orders are returned, newest first, with the buyer attached.
///
/// Expected: Ok with two orders for the buyer in descending creation order, each naming the buyer
#[tokio::test]
async fn returns_own_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let buyer = UserFactory::new(db).build().await?;
    let other = UserFactory::new(db).build().await?;
    let game = GameFactory::new(db, admin.id).build().await?;

    let now = Utc::now();
    let (older, _) = OrderFactory::new(db, buyer.id)
        .item(&game)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let (newer, _) = OrderFactory::new(db, buyer.id)
        .item(&game)
        .created_at(now)
        .build()
        .await?;
    OrderFactory::new(db, other.id).item(&game).build().await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_by_user(buyer.id).await?;

    assert_eq!(
        orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert!(orders.iter().all(|o| o.items.len() == 1));
    assert!(orders
        .iter()
        .all(|o| o.buyer.as_ref().map(|b| b.id) == Some(buyer.id)));

    Ok(())
}
