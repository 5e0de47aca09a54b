use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

// All fields optional; presence is checked when building service params.

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RegisterDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authenticated user together with a freshly issued bearer token.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AuthDto {
    pub user: UserDto,
    pub token: String,
}
