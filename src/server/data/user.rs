//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing store accounts. It handles
//! account creation, credential lookup, profile updates, and role management, converting
//! entity models into domain models at the infrastructure boundary so password hashes
//! only leave this module through `UserCredentials`.

use chrono::Utc;
use entity::user::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User, UserCredentials};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Name, normalized email, password hash, and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email together with their stored password hash.
    ///
    /// Only used by login to verify credentials.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User and hash found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let password_hash = entity.password_hash.clone();
            UserCredentials {
                user: User::from_entity(entity),
                password_hash,
            }
        }))
    }

    /// Applies a partial profile update.
    ///
    /// Only fields set in `param` are written; `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Id of the user to update
    /// - `param` - New name, email, and/or password hash
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to decide whether the configured bootstrap admin must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination.
    ///
    /// Returns a page of users ordered alphabetically by name for the admin user listing.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: Role) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.role = ActiveValue::Set(role);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
