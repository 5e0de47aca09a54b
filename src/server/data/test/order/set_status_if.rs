use super::*;

/// Tests a guarded status change from the expected status.
///
/// Expected: Ok(true) and the stored status is updated
#[tokio::test]
async fn changes_status_when_expected_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let (order, _) = OrderFactory::new(db, user.id).build().await?;

    let repo = OrderRepository::new(db);
    assert!(
        repo.set_status_if(order.id, OrderStatus::Pending, OrderStatus::Paid)
            .await?
    );

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Paid);

    Ok(())
}

/// Tests a guarded status change when the order already moved on.
///
/// Expected: Ok(false) and the stored status is unchanged
#[tokio::test]
async fn leaves_status_when_expected_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let (order, _) = OrderFactory::new(db, user.id)
        .status(OrderStatus::Delivered)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    assert!(
        !repo
            .set_status_if(order.id, OrderStatus::Pending, OrderStatus::Cancelled)
            .await?
    );

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Delivered);

    Ok(())
}
