//! GraphQL projections of the user entity.
//!
//! Field names and types here must agree with
//! `domain::entity_mapping::USER_GRAPHQL_FIELDS`; startup validation
//! compares the two.

use async_graphql::{InputObject, SimpleObject};

use crate::domain::{User, UserDraft};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    /// Identifier assigned by the store.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

/// Field values for creating or updating a user.
#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

impl From<CreateUserInput> for UserDraft {
    fn from(input: CreateUserInput) -> Self {
        Self::new(input.name, input.email)
    }
}
