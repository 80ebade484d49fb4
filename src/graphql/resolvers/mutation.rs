use crate::domain::NewUser;
use crate::graphql::resolvers::null_on_error;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::User;
use async_graphql::{Context, FieldResult, Object};

/// Root mutation object for GraphQL
pub struct Mutation;

/// Root Mutation
#[Object(name = "RootMutation")]
impl Mutation {
    /// Add a user; the id is assigned by the server
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: Option<i32>,
    ) -> FieldResult<Option<User>> {
        let context = ctx.data::<GraphQLContext>()?;

        let created = context
            .storage
            .create_user(NewUser { name, age })
            .await
            .map_err(|e| {
                tracing::error!("Failed to add user: {}", e);
                async_graphql::Error::new(format!("Failed to add user: {}", e))
            });

        let user = null_on_error(ctx, created);
        if let Some(user) = &user {
            tracing::info!("Added user: {} (ID: {})", user.name, user.id);
        }

        Ok(user.map(User::from))
    }
}
