use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no bearer token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No bearer token provided")]
    MissingToken,

    /// Bearer token failed signature, format, or expiry validation.
    ///
    /// Results in a 401 Unauthorized response that includes the validation reason.
    #[error("Token validation failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token is valid but its user no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match a user.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic. Token validation failures echo the validation reason, matching what clients use
/// to detect expired sessions.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authorized, no token provided")),
            )
                .into_response(),
            Self::InvalidToken(err) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    message: "Not authorized, token failed".to_string(),
                    error: Some(err.to_string()),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authorized, user not found")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid email or password")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Access denied. Admin privileges required.")),
            )
                .into_response(),
        }
    }
}
