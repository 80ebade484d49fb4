use crate::config::ServerConfig;
use crate::constants::{GRAPHIQL_PATH, GRAPHQL_PATH, HEALTH_PATH, SERVICE_NAME};
use crate::graphql::{create_schema, GraphQLSchema};
use crate::storage::Storage;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    http::Method,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};
use hyper::Server;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GraphQL handler (supports GET and POST)
async fn graphql_handler(
    Extension(schema): Extension<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL UI
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Create the HTTP router for the given storage
pub fn create_server(storage: Arc<dyn Storage>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let schema = create_schema(storage);

    // With GraphiQL off, GET on the endpoint executes query-string requests
    let graphql_route = if config.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler).get(graphql_handler)
    };

    let mut router = Router::new()
        .route(HEALTH_PATH, get(health))
        .route(GRAPHQL_PATH, graphql_route);
    if config.graphiql {
        router = router.route(GRAPHIQL_PATH, get(graphiql));
    }

    router.layer(Extension(schema)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(storage: Arc<dyn Storage>, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_server(storage, config);
    let addr = config.socket_addr()?;

    info!("HTTP server running on http://{addr}");
    info!("Health check: http://{addr}{HEALTH_PATH}");
    info!("GraphQL:      http://{addr}{GRAPHQL_PATH}");
    if config.graphiql {
        info!("GraphiQL UI:  http://{addr}{GRAPHIQL_PATH}");
    }

    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
