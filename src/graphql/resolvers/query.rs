use crate::graphql::resolvers::null_on_error;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Expense, User};
use async_graphql::{Context, FieldResult, Object};
use tracing::debug;

/// Root query object for GraphQL
pub struct Query;

/// Root query
#[Object(name = "RootQuery")]
impl Query {
    /// Get all users in the order they were added
    async fn users(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<User>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let users = null_on_error(ctx, context.storage.get_all_users().await);
        Ok(users.map(|users| users.into_iter().map(User::from).collect()))
    }

    /// Get all expenses in the order they were recorded
    async fn expenses(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Expense>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let expenses = null_on_error(ctx, context.storage.get_all_expenses().await);
        Ok(expenses.map(|expenses| expenses.into_iter().map(Expense::from).collect()))
    }

    /// Return all expenses higher than some value
    async fn filter_expenses(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Exclusive lower bound on the expense amount")] value: i32,
    ) -> FieldResult<Option<Vec<Expense>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let expenses = null_on_error(ctx, context.storage.get_expenses_above(value).await);
        if let Some(expenses) = &expenses {
            debug!(threshold = value, matched = expenses.len(), "Filtered expenses");
        }

        Ok(expenses.map(|expenses| expenses.into_iter().map(Expense::from).collect()))
    }
}
