use super::*;

/// Tests creating an order with two line items.
///
/// Expected: Ok with pending status, items in request order, and summed total
#[tokio::test]
async fn creates_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(NewOrder::new(
            user.id,
            vec![
                OrderItem {
                    game_id: 1,
                    title: "Portal".to_string(),
                    price: 9.99,
                    image: None,
                },
                OrderItem {
                    game_id: 2,
                    title: "Portal 2".to_string(),
                    price: 19.99,
                    image: Some("https://img.example.com/p2.png".to_string()),
                },
            ],
            PaymentMethod::MarkedPaid,
        ))
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_method, PaymentMethod::MarkedPaid);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].title, "Portal");
    assert!((order.total - 29.98).abs() < 1e-9);

    Ok(())
}
