use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub genre: String,
    pub image: String,
    pub download_url: String,
    pub created_by: Option<UserSummaryDto>,
    pub stock: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateGameDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub genre: Option<String>,
    pub image: Option<String>,
    pub download_url: Option<String>,
    pub stock: Option<i32>,
    pub rating: Option<f64>,
}

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateGameDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub genre: Option<String>,
    pub image: Option<String>,
    pub download_url: Option<String>,
    pub stock: Option<i32>,
    pub rating: Option<f64>,
}
