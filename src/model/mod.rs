//! Request and response DTOs for the REST API.
//!
//! These types define the JSON wire format. Server-side domain models convert into them at
//! the controller boundary.

pub mod api;
pub mod auth;
pub mod game;
pub mod order;
pub mod upload;
pub mod user;
