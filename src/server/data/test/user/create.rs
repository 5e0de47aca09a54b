use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the account with the given role and sets both
/// timestamps.
///
/// Expected: Ok with user created as a regular user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await?;

    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john@example.com");
    assert_eq!(user.role, Role::User);
    assert!(!user.is_admin());
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err when inserting a second user with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@example.com").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
