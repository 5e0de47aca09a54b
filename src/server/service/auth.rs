//! Account registration, login, and profile management.
//!
//! `AuthService` validates credentials against stored argon2 hashes and issues a fresh
//! bearer token for every successful registration, login, or profile change.

use entity::user::Role;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{
        CreateUserParam, LoginParam, RegisterParam, UpdateProfileParam, UpdateUserParam, User,
    },
    service::token::TokenService,
    util::password::{hash_password, verify_password},
};

const DUPLICATE_EMAIL: &str = "User with this email already exists";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Creates a regular account and signs the new user in.
    ///
    /// # Arguments
    /// - `param` - Validated name, normalized email, and plaintext password
    ///
    /// # Returns
    /// - `Ok((User, String))` - Created user and bearer token
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterParam) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                role: Role::User,
            })
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_EMAIL))?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        let token = self.tokens.issue(user.id)?;
        Ok((user, token))
    }

    /// Checks an email/password pair and issues a token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok((User, String))` - Authenticated user and bearer token
    /// - `Err(AuthError::InvalidCredentials)` - No match
    pub async fn login(&self, param: LoginParam) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(credentials.user.id)?;
        Ok((credentials.user, token))
    }

    /// Applies a profile update for the signed-in user and re-issues their token.
    ///
    /// # Arguments
    /// - `user_id` - Id of the signed-in user
    /// - `param` - Validated optional name, email, and password
    ///
    /// # Returns
    /// - `Ok((User, String))` - Updated user and bearer token
    /// - `Err(AppError::BadRequest)` - New email belongs to another account
    /// - `Err(AppError::NotFound)` - User vanished since authentication
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
                }
            }
        }

        let password_hash = param
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = user_repo
            .update(
                user_id,
                UpdateUserParam {
                    name: param.name,
                    email: param.email,
                    password_hash,
                },
            )
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_EMAIL))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let token = self.tokens.issue(user.id)?;
        Ok((user, token))
    }
}

/// Turns a unique-constraint violation into a 400 with `message`; other errors pass through.
fn map_unique_violation(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::BadRequest(message.to_string()),
        _ => err.into(),
    }
}
