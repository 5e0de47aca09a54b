//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every repository is
//! generic over `ConnectionTrait` so the same queries run on the pool or inside a transaction.

pub mod game;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
