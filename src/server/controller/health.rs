use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};

use crate::model::api::{BannerDto, HealthDto};

/// Tag for grouping service status endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Root banner confirming the API is up.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses((status = 200, description = "API is running", body = BannerDto)),
)]
pub async fn banner() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(BannerDto {
            message: "GameStore API is running...".to_string(),
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses((status = 200, description = "API is healthy", body = HealthDto)),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "OK".to_string(),
            message: "API is healthy".to_string(),
        }),
    )
}
