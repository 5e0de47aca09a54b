//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod media;

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, media::MediaError,
    },
};

/// Whether 500 responses carry the underlying error message. Off in production.
static EXPOSE_ERROR_DETAILS: AtomicBool = AtomicBool::new(false);

/// Enables or disables error details in 500 response bodies.
///
/// Called once at startup from the configured environment.
pub fn expose_error_details(enabled: bool) {
    EXPOSE_ERROR_DETAILS.store(enabled, Ordering::Relaxed);
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Hosted media service error.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    MediaErr(#[from] MediaError),

    /// Malformed multipart request body.
    ///
    /// Results in the status axum assigns to the rejection, usually 400 Bad Request.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Bug-class failure inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// I/O failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Authenticated user may not touch the requested resource.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details; their message
/// reaches the client only when error details are exposed.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `MultipartErr` variants
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, MediaErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(ErrorDto::new(msg))).into_response(),
            Self::MultipartErr(err) => (
                err.status(),
                Json(ErrorDto {
                    message: "Invalid multipart body".to_string(),
                    error: Some(err.body_text()),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client. The underlying message is attached only when error details are exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let error = EXPOSE_ERROR_DETAILS
            .load(Ordering::Relaxed)
            .then(|| self.0.to_string());

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
                error,
            }),
        )
            .into_response()
    }
}
