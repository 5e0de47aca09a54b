use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Admin,
}

/// Resolves the caller from an `Authorization: Bearer <token>` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Verifies the bearer token, loads its user, and checks every permission in order.
    ///
    /// An empty permission list only requires a valid token for an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token user no longer exists
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;
        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
