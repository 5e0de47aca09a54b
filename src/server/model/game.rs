//! Catalog domain models and parameters.

use chrono::{DateTime, Utc};
use entity::game::Genre;
use sea_orm::ActiveEnum;

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::{error::AppError, model::user::User},
};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_PRICE: f64 = 10_000.0;
pub const MAX_RATING: f64 = 5.0;
pub const DEFAULT_STOCK: i32 = 999;
pub const DEFAULT_IMAGE: &str = "https://via.placeholder.com/300x400?text=Game+Cover";

/// Catalog entry with its creator populated when loaded through a join.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub genre: Genre,
    pub image: String,
    pub download_url: String,
    pub created_by: i32,
    pub creator: Option<User>,
    pub stock: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Converts a game entity and its optionally joined creator into a domain model.
    pub fn from_entity(entity: entity::game::Model, creator: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            genre: entity.genre,
            image: entity.image,
            download_url: entity.download_url,
            created_by: entity.created_by,
            creator: creator.map(User::from_entity),
            stock: entity.stock,
            rating: entity.rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            genre: self.genre.to_value(),
            image: self.image,
            download_url: self.download_url,
            created_by: self.creator.map(User::into_summary_dto),
            stock: self.stock,
            rating: self.rating,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated input for inserting a catalog entry.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub genre: Genre,
    pub image: String,
    pub download_url: String,
    pub created_by: i32,
    pub stock: i32,
    pub rating: f64,
}

impl CreateGameParam {
    /// Validates a create request and fills defaults for optional fields.
    ///
    /// # Arguments
    /// - `dto` - Raw request body
    /// - `created_by` - Id of the admin creating the game
    ///
    /// # Returns
    /// - `Ok(CreateGameParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Required field missing or a value out of range
    pub fn from_dto(dto: CreateGameDto, created_by: i32) -> Result<Self, AppError> {
        let (Some(title), Some(description), Some(price), Some(genre)) = (
            dto.title.filter(|v| !v.trim().is_empty()),
            dto.description.filter(|v| !v.trim().is_empty()),
            dto.price,
            dto.genre.filter(|v| !v.trim().is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Please provide title, description, price, and genre".to_string(),
            ));
        };

        Ok(Self {
            title: validate_title(&title)?,
            description: validate_description(&description)?,
            price: validate_price(price)?,
            genre: parse_genre(&genre)?,
            image: dto
                .image
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            download_url: dto.download_url.unwrap_or_default(),
            created_by,
            stock: dto.stock.map(validate_stock).transpose()?.unwrap_or(DEFAULT_STOCK),
            rating: dto.rating.map(validate_rating).transpose()?.unwrap_or(0.0),
        })
    }
}

/// Validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub genre: Option<Genre>,
    pub image: Option<String>,
    pub download_url: Option<String>,
    pub stock: Option<i32>,
    pub rating: Option<f64>,
}

impl UpdateGameParam {
    pub fn from_dto(dto: UpdateGameDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title.map(|v| validate_title(&v)).transpose()?,
            description: dto
                .description
                .map(|v| validate_description(&v))
                .transpose()?,
            price: dto.price.map(validate_price).transpose()?,
            genre: dto.genre.map(|v| parse_genre(&v)).transpose()?,
            image: dto.image.filter(|v| !v.trim().is_empty()),
            download_url: dto.download_url,
            stock: dto.stock.map(validate_stock).transpose()?,
            rating: dto.rating.map(validate_rating).transpose()?,
        })
    }
}

/// Parses a genre label such as `RPG` or `action`.
///
/// Matching is case-insensitive against the closed genre list.
pub fn parse_genre(value: &str) -> Result<Genre, AppError> {
    use sea_orm::Iterable;

    let trimmed = value.trim();
    Genre::iter()
        .find(|genre| genre.to_value().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| AppError::BadRequest(format!("{} is not a valid genre", value)))
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Title cannot exceed {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(title.to_string())
}

fn validate_description(description: &str) -> Result<String, AppError> {
    if description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Description cannot be empty".to_string(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Description cannot exceed {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(description.to_string())
}

fn validate_price(price: f64) -> Result<f64, AppError> {
    if !(0.0..=MAX_PRICE).contains(&price) {
        return Err(AppError::BadRequest(format!(
            "Price must be between 0 and {}",
            MAX_PRICE
        )));
    }
    Ok(price)
}

fn validate_stock(stock: i32) -> Result<i32, AppError> {
    if stock < 0 {
        return Err(AppError::BadRequest("Stock cannot be negative".to_string()));
    }
    Ok(stock)
}

fn validate_rating(rating: f64) -> Result<f64, AppError> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between 0 and {}",
            MAX_RATING
        )));
    }
    Ok(rating)
}
