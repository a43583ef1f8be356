//! Process-local `UserRepository` for running without a database.
//!
//! Rows live in a `BTreeMap` keyed by id, so listing returns insertion order.
//! Identifiers come from a counter starting at 1 and are never reused, which
//! mirrors a `SERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<UserId, User>,
    last_id: i32,
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user store is poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.lock()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        state.last_id = next;
        let user = User::from_draft(UserId::new(next), draft.clone());
        state.rows.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserPersistenceError> {
        let mut state = self.lock()?;
        Ok(state.rows.get_mut(&id).map_or(0, |user| {
            user.apply(draft.clone());
            1
        }))
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError> {
        Ok(usize::from(self.lock()?.rows.remove(&id).is_some()))
    }
}
