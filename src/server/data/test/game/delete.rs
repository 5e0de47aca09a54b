use super::*;

/// Tests deleting a game.
///
/// Expected: Ok(true) and the game is gone
#[tokio::test]
async fn deletes_existing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let game = GameFactory::new(db, admin.id).build().await?;

    let repo = GameRepository::new(db);
    assert!(repo.delete(game.id).await?);
    assert!(repo.find_by_id(game.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing game.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    assert!(!repo.delete(12345).await?);

    Ok(())
}
