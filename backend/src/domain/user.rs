//! User data model.
//!
//! `User` is the read model returned by every operation; `UserDraft` is the
//! write model shared by create and update. Neither type enforces format or
//! uniqueness on `name` or `email`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
///
/// Identifiers are allocated by the persistence layer on insert and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw key value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw key value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values supplied when creating or updating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Display name; any string is accepted.
    pub name: String,
    /// Contact address; any string is accepted.
    pub email: String,
}

impl UserDraft {
    /// Build a draft from owned or borrowed strings.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Persisted application user.
///
/// ## Invariants
/// - `id` was assigned by the store and is immutable.
/// - `name` and `email` are always present (possibly empty strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Assemble a user from its stored parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Materialise a draft under a freshly assigned identifier.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Replace the mutable fields with the draft's values, keeping the id.
    pub fn apply(&mut self, draft: UserDraft) {
        let UserDraft { name, email } = draft;
        self.name = name;
        self.email = email;
    }
}
