//! Domain models and operation parameters.
//!
//! Domain models are built from entities at the repository boundary and converted into DTOs
//! at the controller boundary. Parameter types carry validated request input into services.

pub mod game;
pub mod media;
pub mod order;
pub mod user;
