use super::*;

/// Tests catalog ordering.
///
/// Expected: Ok with newest game first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let now = Utc::now();
    GameFactory::new(db, admin.id)
        .title("Old")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    GameFactory::new(db, admin.id)
        .title("New")
        .created_at(now)
        .build()
        .await?;
    GameFactory::new(db, admin.id)
        .title("Middle")
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all().await?;

    assert_eq!(
        games.iter().map(|g| g.title.as_str()).collect::<Vec<_>>(),
        vec!["New", "Middle", "Old"]
    );
    assert!(games.iter().all(|g| g.creator.is_some()));

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    assert!(repo.get_all().await?.is_empty());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
