//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an admin user and one game owned by them.
///
/// # Returns
/// - `Ok((admin, game))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::game::Model), DbErr> {
    let admin = crate::factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let game = crate::factory::game::create_game(db, admin.id).await?;

    Ok((admin, game))
}
