//! Domain primitives, ports, and services.
//!
//! Purpose: define the `User` entity, its explicit storage and GraphQL
//! projections, the repository port, and the CRUD service. Nothing here
//! depends on Actix, Diesel, or async-graphql.
//!
//! Public surface:
//! - `User`, `UserId`, `UserDraft`: the entity and its write model.
//! - `UserService`: CRUD use-cases delegating to `ports::UserRepository`.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod entity_mapping;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::entity_mapping::{EntityMappingError, validate_entity_mappings};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;
