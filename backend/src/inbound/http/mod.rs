//! HTTP inbound adapter: the GraphQL endpoint and health probes.

pub mod error;
pub mod graphql;
pub mod health;

pub use graphql::configure;
