//! Schema construction.

use async_graphql::{EmptySubscription, Schema};

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::domain::UserService;

/// The executable users schema.
pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `service` available to every resolver.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::UserService;
/// use backend::inbound::graphql::build_schema;
/// use backend::outbound::memory::InMemoryUserRepository;
///
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let schema = build_schema(service);
/// assert!(schema.sdl().contains("createUser"));
/// ```
#[must_use]
pub fn build_schema(service: UserService) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Render the schema SDL without wiring a service.
#[must_use]
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
