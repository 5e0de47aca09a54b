use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that users are ordered by name and the total counts users, not pages.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Eve", "Bob", "Dan", "Amy", "Cat"] {
        UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(
        users.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Amy", "Bob"]
    );

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Eve");

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
