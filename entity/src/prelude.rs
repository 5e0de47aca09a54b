pub use super::game::Entity as Game;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::user::Entity as User;
