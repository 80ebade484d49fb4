pub mod mutation;
pub mod query;

pub use mutation::Mutation;
pub use query::Query;

use async_graphql::{Context, Error};

/// Reports `result`'s error against the current field and resolves the field to null
pub(crate) fn null_on_error<T, E: Into<Error>>(ctx: &Context<'_>, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err = err.into().into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(err));
            None
        }
    }
}
