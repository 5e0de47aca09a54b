use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game::{CreateGameParam, Game, UpdateGameParam},
        service::game::GameService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

const GAME_NOT_FOUND: &str = "Game not found";

/// List every game, newest first.
///
/// Each game carries its creator's id, name, and email.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_all().await?;
    let dtos: Vec<_> = games.into_iter().map(Game::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}

/// Get one game.
///
/// # Returns
/// - `200 OK` - The game
/// - `404 Not Found` - No game with that id, or the id is malformed
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "The game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, GAME_NOT_FOUND)?;
    let game = GameService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(game.into_dto()))))
}

/// Search games by keyword.
///
/// Matches the keyword case-insensitively against title and description. Wildcard
/// characters in the keyword match literally.
#[utoipa::path(
    get,
    path = "/api/games/search/{keyword}",
    tag = GAME_TAG,
    params(("keyword" = String, Path, description = "Text to look for")),
    responses(
        (status = 200, description = "Matching games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_games(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).search(&keyword).await?;
    let dtos: Vec<_> = games.into_iter().map(Game::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}

/// Add a game to the catalog.
///
/// # Access Control
/// - `Admin` - Only admins can create games
///
/// # Returns
/// - `201 Created` - Game created, owned by the calling admin
/// - `400 Bad Request` - Missing required field, unknown genre, or value out of range
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created successfully", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateGameParam::from_dto(payload, admin.id)?;
    let game = GameService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(game.into_dto()).with_message("Game created successfully")),
    ))
}

/// Update a game. Absent fields are left untouched.
///
/// # Access Control
/// - `Admin` - Only admins can update games
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Game ID")),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Game updated successfully", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id, GAME_NOT_FOUND)?;
    let param = UpdateGameParam::from_dto(payload)?;
    let game = GameService::new(&state.db).update(id, param).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(game.into_dto()).with_message("Game updated successfully")),
    ))
}

/// Remove a game from the catalog. Orders keep their snapshot of it.
///
/// # Access Control
/// - `Admin` - Only admins can delete games
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game deleted successfully", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id, GAME_NOT_FOUND)?;
    GameService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Game deleted successfully"))))
}
