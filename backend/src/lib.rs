//! Users GraphQL backend.
//!
//! A CRUD API over a single `User` entity, laid out as domain (entity,
//! ports, service), outbound adapters (Diesel/PostgreSQL and an in-memory
//! store), and inbound adapters (GraphQL schema served over Actix).

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
