//! Query resolvers: `users` and `user(id)`.

use async_graphql::{Context, Object, Result};

use super::error::to_graphql_error;
use super::types::UserObject;
use crate::domain::{UserId, UserService};

/// Root query type.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every stored user.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let service = ctx.data::<UserService>()?;
        let users = service.find_all().await.map_err(to_graphql_error)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// The user with the given id, or null when none exists.
    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<UserObject>> {
        let service = ctx.data::<UserService>()?;
        let user = service
            .find_one(UserId::new(id))
            .await
            .map_err(to_graphql_error)?;
        Ok(user.map(UserObject::from))
    }
}
