use super::*;

/// Tests that credentials lookup returns the stored hash.
///
/// Expected: Ok(Some) with the hash written by the factory
#[tokio::test]
async fn returns_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("jane@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("jane@example.com")
        .await?
        .expect("user should exist");

    assert_eq!(credentials.user.id, created.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests lookup of an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
