//! User domain models and parameters.
//!
//! Provides the domain model for store accounts and the parameter types for registration,
//! login, profile updates, and admin role management. Parameter constructors validate raw
//! DTO input so services only ever see well-formed values.

use chrono::{DateTime, Utc};
use entity::user::Role;
use sea_orm::ActiveEnum;

use crate::{
    model::{
        auth::{LoginDto, RegisterDto, UpdateProfileDto},
        user::{PaginatedUsersDto, UserDto, UserSummaryDto},
    },
    server::error::AppError,
};

/// Maximum length of a display name.
pub const MAX_NAME_LENGTH: usize = 50;
/// Minimum length of a plaintext password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Store account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped here and never leaves the data layer through this type.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_value(),
            created_at: self.created_at,
        }
    }

    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// User together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated registration input. The password is still plaintext here.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterParam {
    /// Validates a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterParam)` - Trimmed name, normalized email, and password of sufficient length
    /// - `Err(AppError::BadRequest)` - Missing field or a field failing validation
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(dto.name),
            non_empty(dto.email),
            non_empty(dto.password),
        ) else {
            return Err(AppError::BadRequest(
                "Please provide all required fields".to_string(),
            ));
        };

        Ok(Self {
            name: validate_name(&name)?,
            email: normalize_email(&email)?,
            password: validate_password(password)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let (Some(email), Some(password)) = (non_empty(dto.email), non_empty(dto.password)) else {
            return Err(AppError::BadRequest(
                "Please provide email and password".to_string(),
            ));
        };

        Ok(Self {
            email: email.trim().to_lowercase(),
            password,
        })
    }
}

/// Validated profile update. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        Ok(Self {
            name: non_empty(dto.name).map(|n| validate_name(&n)).transpose()?,
            email: non_empty(dto.email)
                .map(|e| normalize_email(&e))
                .transpose()?,
            password: non_empty(dto.password).map(validate_password).transpose()?,
        })
    }
}

/// Column changes applied by the repository on profile update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for changing a user's role.
#[derive(Debug, Clone)]
pub struct SetRoleParam {
    pub user_id: i32,
    pub role: Role,
}

/// Parses a role name as stored in the database (`user` or `admin`).
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    Role::try_from_value(&value.trim().to_lowercase())
        .map_err(|_| AppError::BadRequest(format!("{} is not a valid role", value)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

fn validate_password(password: String) -> Result<String, AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(password)
}

/// Trims and lower-cases an email address and checks it has the `local@domain.tld` shape.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && tld.len() >= 2)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest(
            "Please provide a valid email".to_string(),
        ));
    }

    Ok(email)
}
