//! SeaORM entity definitions for the game store schema.
//!
//! Tables are created by the `migration` crate; these models mirror them column for column.

pub mod prelude;

pub mod game;
pub mod order;
pub mod order_item;
pub mod user;
