use super::*;

/// Tests matching on title and description regardless of case.
///
/// Expected: Ok with both games whose title or description mention the keyword
#[tokio::test]
async fn matches_title_or_description_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    GameFactory::new(db, admin.id)
        .title("Zelda: Breath of the Wild")
        .build()
        .await?;
    GameFactory::new(db, admin.id)
        .title("Hyrule Warriors")
        .description("Action spin-off set in the ZELDA universe")
        .build()
        .await?;
    GameFactory::new(db, admin.id)
        .title("Doom")
        .description("Demons")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.search("zelda").await?;

    assert_eq!(games.len(), 2);
    assert!(games.iter().all(|g| g.title != "Doom"));

    Ok(())
}

/// Tests that LIKE wildcards in the keyword are matched literally.
///
/// Expected: Ok with only the game whose title contains a literal `%`
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    GameFactory::new(db, admin.id)
        .title("100% Orange Juice")
        .build()
        .await?;
    GameFactory::new(db, admin.id).title("Tetris").build().await?;

    let repo = GameRepository::new(db);

    let games = repo.search("%").await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "100% Orange Juice");

    assert!(repo.search("_etris").await?.is_empty());

    Ok(())
}

/// Tests case-insensitive matching of accented letters.
///
/// Expected: Ok with the game found by lower-case and upper-case accented keywords
#[tokio::test]
async fn matches_accented_letters_in_any_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    GameFactory::new(db, admin.id)
        .title("Pokémon Émeraude")
        .build()
        .await?;
    GameFactory::new(db, admin.id)
        .title("Tetris")
        .description("Ein Spiel über fallende BLÖCKE")
        .build()
        .await?;

    let repo = GameRepository::new(db);

    let games = repo.search("émeraude").await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "Pokémon Émeraude");

    assert_eq!(repo.search("POKÉMON").await?.len(), 1);

    let games = repo.search("blöcke").await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "Tetris");

    Ok(())
}

/// Tests that search follows a title changed through `update`.
///
/// Expected: Ok with the game found by its new title only
#[tokio::test]
async fn matches_updated_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db).admin(true).build().await?;
    let game = GameFactory::new(db, admin.id).title("Okami").build().await?;

    let repo = GameRepository::new(db);
    repo.update(
        game.id,
        UpdateGameParam {
            title: Some("Ōkami HD".to_string()),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(repo.search("ōKAMI").await?.len(), 1);
    assert!(repo.search("okami").await?.is_empty());

    Ok(())
}
