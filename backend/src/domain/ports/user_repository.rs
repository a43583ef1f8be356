//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Underlying cause.
            message: String,
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Underlying cause.
            message: String,
        } => "user repository query failed: {message}",
    }
}

/// Storage primitives for the `users` table.
///
/// Adapters translate between their row representation and [`User`]. Missing
/// rows are reported as `Ok(None)` or silently ignored, never as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in store-defined order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new row and return it with the identifier the store assigned.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite `name` and `email` on the matching row.
    ///
    /// Returns the number of rows touched (`0` when the id is unknown).
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserPersistenceError>;

    /// Delete the matching row, returning the number of rows removed.
    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError>;
}
