//! Catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{CreateGameParam, Game, UpdateGameParam},
};

const GAME_NOT_FOUND: &str = "Game not found";

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all().await?)
    }

    /// Gets one game or a 404.
    pub async fn get_by_id(&self, id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(GAME_NOT_FOUND.to_string()))
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).search(keyword.trim()).await?)
    }

    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        let game = GameRepository::new(self.db).create(param).await?;

        tracing::info!("Game {} \"{}\" created by user {}", game.id, game.title, game.created_by);

        Ok(game)
    }

    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(GAME_NOT_FOUND.to_string()))
    }

    /// Deletes a game. Existing orders keep their snapshot of it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !GameRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(GAME_NOT_FOUND.to_string()));
        }

        tracing::info!("Game {} deleted", id);

        Ok(())
    }
}
