use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{PaginatedUsersDto, UpdateRoleDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{parse_role, GetAllUsersParam, SetRoleParam},
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

const USER_NOT_FOUND: &str = "User not found";
const MAX_PER_PAGE: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// Get paginated list of all users.
///
/// Users are ordered by name. Pages are zero-indexed; `per_page` is clamped to 1..=100.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Users per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: params.per_page.clamp(1, MAX_PER_PAGE),
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(users.into_dto()))))
}

/// Get one user.
///
/// # Access Control
/// - `Admin` - Only admins can view other accounts
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id, USER_NOT_FOUND)?;
    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(user.into_dto()))))
}

/// Change a user's role.
///
/// An admin cannot remove their own admin role.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "User role updated successfully", body = UserDto),
        (status = 400, description = "Missing or unknown role, or self-demotion", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id, USER_NOT_FOUND)?;
    let Some(role) = payload.role.filter(|r| !r.trim().is_empty()) else {
        return Err(AppError::BadRequest("Please provide a role".to_string()));
    };

    let param = SetRoleParam {
        user_id: id,
        role: parse_role(&role)?,
    };
    let user = UserService::new(&state.db).set_role(&admin, param).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(user.into_dto()).with_message("User role updated successfully")),
    ))
}
