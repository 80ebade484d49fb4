use crate::graphql::resolvers::{Mutation, Query};
use crate::storage::{InMemoryStorage, Storage};
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub storage: Arc<dyn Storage>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema with the given storage
pub fn create_schema(storage: Arc<dyn Storage>) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext { storage })
        .finish()
}

/// SDL of the schema, independent of any particular storage
pub fn schema_sdl() -> String {
    create_schema(Arc::new(InMemoryStorage::empty())).sdl()
}
