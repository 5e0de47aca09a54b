//! Game factory for creating catalog entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::game::Genre;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games.
///
/// The creator must already exist since `created_by` is a foreign key.
///
/// # Example
///
/// ```rust,ignore
/// let game = GameFactory::new(&db, admin.id)
///     .title("Celeste")
///     .price(19.99)
///     .stock(1)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    price: f64,
    genre: Genre,
    image: String,
    created_by: i32,
    stock: i32,
    rating: f64,
    created_at: DateTime<Utc>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"`
    /// - description: `"Description of game {id}"`
    /// - price: `29.99`
    /// - genre: `Genre::Action`
    /// - stock: `10`
    /// - rating: `0.0`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Game {}", id),
            description: format!("Description of game {}", id),
            price: 29.99,
            genre: Genre::Action,
            image: format!("https://img.example.com/{}.png", id),
            created_by,
            stock: 10,
            rating: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Overrides the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            title_folded: ActiveValue::Set(entity::game::fold(&self.title)),
            description_folded: ActiveValue::Set(entity::game::fold(&self.description)),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            genre: ActiveValue::Set(self.genre),
            image: ActiveValue::Set(self.image),
            download_url: ActiveValue::Set(String::new()),
            created_by: ActiveValue::Set(self.created_by),
            stock: ActiveValue::Set(self.stock),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values owned by `created_by`.
pub async fn create_game(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, created_by).build().await
}
