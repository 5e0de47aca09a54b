use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    /// Underlying cause, only present outside production for server errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

/// Success envelope shared by all endpoints returning data.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a collection and records its length in `count`.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(data.len()),
            data: Some(data),
        }
    }
}

/// Success envelope for endpoints that only report an outcome.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BannerDto {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}
