use super::*;

/// Tests a partial update.
///
/// Expected: Ok(Some) with only price changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let created = GameFactory::new(db, admin.id)
        .title("Celeste")
        .price(19.99)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateGameParam {
                price: Some(9.99),
                ..Default::default()
            },
        )
        .await?
        .expect("game should exist");

    assert_eq!(updated.title, "Celeste");
    assert_eq!(updated.price, 9.99);
    assert!(updated.creator.is_some());

    Ok(())
}

/// Tests updating a missing game.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    assert!(repo.update(404, UpdateGameParam::default()).await?.is_none());

    Ok(())
}
