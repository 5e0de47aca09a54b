use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{AuthDto, LoginDto, RegisterDto, UpdateProfileDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{LoginParam, RegisterParam, UpdateProfileParam, User},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn auth_dto(user: User, token: String) -> AuthDto {
    AuthDto {
        user: user.into_dto(),
        token,
    }
}

/// Register a new account.
///
/// Creates a user with the `user` role and returns it together with a bearer token.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing or invalid fields, or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Registration successful", body = AuthDto),
        (status = 400, description = "Missing fields or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::from_dto(payload)?;
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .register(param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(auth_dto(user, token)).with_message("Registration successful")),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials accepted, token issued
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Credentials do not match
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(payload)?;
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .login(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(auth_dto(user, token)).with_message("Login successful")),
    ))
}

/// Get the signed-in user's profile.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(user.into_dto()))))
}

/// Update the signed-in user's name, email, or password.
///
/// Blank fields are ignored. A fresh token is returned with the updated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Invalid field or email taken by another account
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated successfully", body = AuthDto),
        (status = 400, description = "Invalid field or email already in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = UpdateProfileParam::from_dto(payload)?;
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .update_profile(user.id, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(auth_dto(user, token)).with_message("Profile updated successfully")),
    ))
}
