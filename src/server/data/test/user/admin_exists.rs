use super::*;

/// Tests admin detection with only regular users.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin detection once an admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).admin(true).build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}
