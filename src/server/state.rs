//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool
//! handle, `TokenService` holds its keys by value, and the media store sits behind an `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{media::MediaStore, token::TokenService};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,

    /// Hosted image storage used by the upload routes.
    ///
    /// Cloudinary in production; tests substitute an in-memory store.
    pub media: Arc<dyn MediaStore>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `media` - Image host implementation
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, media: Arc<dyn MediaStore>) -> Self {
        Self { db, tokens, media }
    }
}
