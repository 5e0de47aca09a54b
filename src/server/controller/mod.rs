//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard` where the route requires it, converts the
//! request DTO into a validated parameter type, calls one service, and wraps the resulting
//! domain model in the JSON envelope.

pub mod auth;
pub mod game;
pub mod health;
pub mod order;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
