//! GraphQL inbound adapter.
//!
//! Resolvers translate arguments into [`UserService`](crate::domain::UserService)
//! calls and service results into the wire types in [`types`]. The service
//! is injected as schema data by [`build_schema`].

mod error;
mod mutation;
mod query;
mod schema;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{UserSchema, build_schema, schema_sdl};
