//! Game catalog repository.
//!
//! Provides `GameRepository` for catalog queries and writes, including the conditional
//! stock decrement used by order placement.

use chrono::Utc;
use entity::game::fold;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::game::{CreateGameParam, Game, UpdateGameParam};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the whole catalog, newest first, with creators populated.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let rows = entity::prelude::Game::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(game, creator)| Game::from_entity(game, creator))
            .collect())
    }

    /// Finds a game by id with its creator populated.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let row = entity::prelude::Game::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(game, creator)| Game::from_entity(game, creator)))
    }

    /// Finds games whose title or description contains `keyword`.
    ///
    /// The keyword is matched literally: `%`, `_`, and `\` are escaped before building the
    /// LIKE pattern. Case is ignored for any script: the keyword is folded the same way as
    /// the `*_folded` columns it is compared against.
    ///
    /// # Arguments
    /// - `keyword` - Raw search text
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Matching games, newest first (empty if none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, keyword: &str) -> Result<Vec<Game>, DbErr> {
        let pattern = format!("%{}%", escape_like(&fold(keyword)));

        let rows = entity::prelude::Game::find()
            .filter(
                Condition::any()
                    .add(
                        entity::game::Column::TitleFolded
                            .like(LikeExpr::new(pattern.clone()).escape('\\')),
                    )
                    .add(
                        entity::game::Column::DescriptionFolded
                            .like(LikeExpr::new(pattern).escape('\\')),
                    ),
            )
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(game, creator)| Game::from_entity(game, creator))
            .collect())
    }

    /// Inserts a new game and returns it with its creator populated.
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let now = Utc::now();
        let entity = entity::game::ActiveModel {
            title_folded: ActiveValue::Set(fold(&param.title)),
            description_folded: ActiveValue::Set(fold(&param.description)),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            genre: ActiveValue::Set(param.genre),
            image: ActiveValue::Set(param.image),
            download_url: ActiveValue::Set(param.download_url),
            created_by: ActiveValue::Set(param.created_by),
            stock: ActiveValue::Set(param.stock),
            rating: ActiveValue::Set(param.rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Game with id {} not found after creation",
            entity.id
        )))
    }

    /// Applies a partial update to a game.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game with its creator
    /// - `Ok(None)` - No game with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = param.title {
            active.title_folded = ActiveValue::Set(fold(&title));
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description_folded = ActiveValue::Set(fold(&description));
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(genre) = param.genre {
            active.genre = ActiveValue::Set(genre);
        }
        if let Some(image) = param.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(download_url) = param.download_url {
            active.download_url = ActiveValue::Set(download_url);
        }
        if let Some(stock) = param.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(rating) = param.rating {
            active.rating = ActiveValue::Set(rating);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes a game. Order items referencing it are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Takes one unit of stock if at least one is available.
    ///
    /// The check and the decrement happen in a single conditional UPDATE, so two concurrent
    /// buyers of the last unit cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - One unit taken
    /// - `Ok(false)` - Game missing or out of stock
    /// - `Err(DbErr)` - Database error during update
    pub async fn take_one(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::update_many()
            .col_expr(entity::game::Column::Stock, Expr::cust_with_values("\"stock\" - ?", [1]))
            .filter(entity::game::Column::Id.eq(id))
            .filter(entity::game::Column::Stock.gte(1))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Adds `delta` units of stock to a game. A deleted game is silently skipped.
    pub async fn adjust_stock(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Game::update_many()
            .col_expr(
                entity::game::Column::Stock,
                Expr::cust_with_values("\"stock\" + ?", [delta]),
            )
            .filter(entity::game::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Game::find().count(self.db).await
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
