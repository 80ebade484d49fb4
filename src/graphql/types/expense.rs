use crate::domain::Expense as DomainExpense;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::User;
use async_graphql::{Context, FieldResult, Object};

/// GraphQL representation of an Expense
#[derive(Clone)]
pub struct Expense {
    pub inner: DomainExpense,
}

impl From<DomainExpense> for Expense {
    fn from(expense: DomainExpense) -> Self {
        Self { inner: expense }
    }
}

/// Describes an expense
#[Object(name = "expense")]
impl Expense {
    async fn id(&self) -> i32 {
        self.inner.id
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// The amount spent
    async fn expense(&self) -> i32 {
        self.inner.expense
    }

    /// Ids of the users sharing this expense
    async fn between(&self) -> Vec<i32> {
        self.inner.between.clone()
    }

    /// Users sharing this expense, in the order they were added
    async fn contributors(&self, ctx: &Context<'_>) -> FieldResult<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;

        let users = context.storage.get_users_by_ids(&self.inner.between).await?;
        Ok(users.into_iter().map(User::from).collect())
    }
}
