use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the provided fields change and the email is left as stored.
///
/// Expected: Ok(Some) with the new name and unchanged email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .name("Old Name")
        .email("keep@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateUserParam {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("user should exist");

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.email, "keep@example.com");
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, UpdateUserParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
