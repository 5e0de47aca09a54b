//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate business rules,
//! coordinate repository calls inside transactions where stock is involved, and talk to the
//! media host. They work with domain models rather than DTOs or entity models.

pub mod auth;
pub mod game;
pub mod media;
pub mod order;
pub mod token;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
