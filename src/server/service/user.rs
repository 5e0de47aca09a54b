//! User service for admin account management.
//!
//! This module provides the `UserService` for listing accounts and changing roles. It works
//! with domain models rather than DTOs.

use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, SetRoleParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total_items) = user_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = total_items.div_ceil(param.per_page);

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Changes a user's role.
    ///
    /// An admin cannot remove their own admin role, so the store always keeps the admin
    /// performing the change.
    ///
    /// # Arguments
    /// - `actor` - Admin performing the change
    /// - `param` - Target user id and new role
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Admin attempted to demote themselves
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn set_role(&self, actor: &User, param: SetRoleParam) -> Result<User, AppError> {
        if actor.id == param.user_id && param.role != Role::Admin {
            return Err(AppError::BadRequest(
                "You cannot remove your own admin role".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .set_role(param.user_id, param.role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "User {} set role of user {} to {:?}",
            actor.id,
            user.id,
            user.role
        );

        Ok(user)
    }
}
