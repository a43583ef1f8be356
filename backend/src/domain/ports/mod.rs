//! Domain ports implemented by outbound adapters.
//!
//! Ports keep the domain independent of Diesel, Actix, and async-graphql:
//! services depend on these traits and adapters are injected at startup.

mod macros;
mod user_repository;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
