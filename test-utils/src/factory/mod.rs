//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(&db).admin(true).build().await?;
//! let game = factory::game::GameFactory::new(&db, admin.id).stock(1).build().await?;
//! let (order, items) = factory::order::OrderFactory::new(&db, admin.id)
//!     .item(&game)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `game` - Create catalog entries
//! - `order` - Create orders with snapshot line items

pub mod game;
pub mod helpers;
pub mod order;
pub mod user;

pub use game::create_game;
pub use helpers::create_game_with_creator;
pub use user::create_user;
