//! Inbound adapters translating external requests into service calls.
//!
//! [`graphql`] holds the schema and resolvers; [`http`] carries them over
//! Actix alongside the health probes.

pub mod graphql;
pub mod http;
