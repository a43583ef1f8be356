//! CRUD use-cases for users.
//!
//! Each operation issues exactly one repository call (two for update, which
//! re-reads the row) and forwards the result. Not-found conditions are never
//! errors: reads and updates return `None`, deletes report success.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDraft, UserId};

/// Service mediating between inbound adapters and the user repository.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

impl UserService {
    /// Create a service backed by the given repository.
    #[must_use]
    pub const fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List every stored user.
    ///
    /// # Errors
    /// Returns [`Error`] when the repository is unreachable or the query fails.
    pub async fn find_all(&self) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .find_all()
            .await
            .map_err(map_persistence_error)?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Fetch one user, or `None` when the id is unknown.
    ///
    /// # Errors
    /// Returns [`Error`] when the repository is unreachable or the query fails.
    pub async fn find_one(&self, id: UserId) -> Result<Option<User>, Error> {
        let user = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        debug!(%id, found = user.is_some(), "fetched user");
        Ok(user)
    }

    /// Persist a new user and return it with its assigned id.
    ///
    /// # Errors
    /// Returns [`Error`] when the repository is unreachable or the insert fails.
    pub async fn create(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_persistence_error)?;
        debug!(id = %user.id(), "created user");
        Ok(user)
    }

    /// Apply `draft` to the user with `id`, then return its current state.
    ///
    /// Unknown ids are a silent no-op and yield `None`.
    ///
    /// # Errors
    /// Returns [`Error`] when the repository is unreachable or a query fails.
    pub async fn update(&self, id: UserId, draft: UserDraft) -> Result<Option<User>, Error> {
        let touched = self
            .repository
            .update(id, &draft)
            .await
            .map_err(map_persistence_error)?;
        debug!(%id, touched, "updated user");
        self.find_one(id).await
    }

    /// Delete the user with `id` if it exists. Always reports `true`.
    ///
    /// # Errors
    /// Returns [`Error`] when the repository is unreachable or the delete fails.
    pub async fn remove(&self, id: UserId) -> Result<bool, Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        debug!(%id, removed, "removed user");
        Ok(true)
    }
}
