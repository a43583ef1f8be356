//! Mutation resolvers: `createUser`, `updateUser`, and `deleteUser`.

use async_graphql::{Context, Object, Result};

use super::error::to_graphql_error;
use super::types::{CreateUserInput, UserObject};
use crate::domain::{UserId, UserService};

/// Root mutation type.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Store a new user and return it with its assigned id.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        create_user_input: CreateUserInput,
    ) -> Result<UserObject> {
        let service = ctx.data::<UserService>()?;
        let user = service
            .create(create_user_input.into())
            .await
            .map_err(to_graphql_error)?;
        Ok(user.into())
    }

    /// Overwrite a user's name and email; null when the id is unknown.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        update_user_input: CreateUserInput,
    ) -> Result<Option<UserObject>> {
        let service = ctx.data::<UserService>()?;
        let user = service
            .update(UserId::new(id), update_user_input.into())
            .await
            .map_err(to_graphql_error)?;
        Ok(user.map(UserObject::from))
    }

    /// Delete a user. Returns true whether or not the id existed.
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<bool> {
        let service = ctx.data::<UserService>()?;
        service
            .remove(UserId::new(id))
            .await
            .map_err(to_graphql_error)
    }
}
