/// Defaults used when `config.toml` leaves a value unset

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_GRAPHIQL: bool = true;

pub const DEFAULT_LOG_FILTER: &str = "expense_graphql=info,tower_http=info";
pub const LOG_FILE_NAME: &str = "expense_graphql.log";

/// Route the GraphQL endpoint is mounted on; GraphiQL points its fetcher here
pub const GRAPHQL_PATH: &str = "/graphql";
pub const GRAPHIQL_PATH: &str = "/graphiql";
pub const HEALTH_PATH: &str = "/health";

pub const SERVICE_NAME: &str = "expense-graphql";
