use crate::domain::User as DomainUser;
use async_graphql::Object;

/// GraphQL representation of a User
#[derive(Clone)]
pub struct User {
    pub inner: DomainUser,
}

impl From<DomainUser> for User {
    fn from(user: DomainUser) -> Self {
        Self { inner: user }
    }
}

/// Represents a user
#[Object(name = "user")]
impl User {
    /// id of the user
    async fn id(&self) -> i32 {
        self.inner.id
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn age(&self) -> Option<i32> {
        self.inner.age
    }
}
