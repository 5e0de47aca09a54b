use super::*;

/// Tests creating a game.
///
/// Verifies that the created game is returned with its creator populated.
///
/// Expected: Ok with creator name and email
#[tokio::test]
async fn creates_game_with_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserFactory::new(db)
        .name("Admin")
        .admin(true)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let game = repo
        .create(CreateGameParam {
            title: "Hades".to_string(),
            description: "Escape the underworld".to_string(),
            price: 24.99,
            genre: Genre::Rpg,
            image: "https://img.example.com/hades.png".to_string(),
            download_url: String::new(),
            created_by: admin.id,
            stock: 999,
            rating: 4.5,
        })
        .await?;

    assert_eq!(game.title, "Hades");
    assert_eq!(game.genre, Genre::Rpg);
    assert_eq!(game.stock, 999);
    let creator = game.creator.expect("creator should be populated");
    assert_eq!(creator.id, admin.id);
    assert_eq!(creator.name, "Admin");

    Ok(())
}
