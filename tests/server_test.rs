use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use expense_graphql::config::ServerConfig;
use expense_graphql::server::create_server;
use expense_graphql::storage::InMemoryStorage;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn app(graphiql: bool) -> Router {
    let config = ServerConfig {
        graphiql,
        ..ServerConfig::default()
    };
    create_server(Arc::new(InMemoryStorage::seeded()), &config)
}

async fn body_json(response: axum::response::Response) -> Result<serde_json::Value> {
    let bytes = hyper::body::to_bytes(response.into_body()).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn graphql_post(query: &str) -> Result<Request<Body>> {
    let body = serde_json::to_vec(&json!({ "query": query }))?;
    Ok(Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))?)
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let response = app(true)
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "expense-graphql");
    Ok(())
}

#[tokio::test]
async fn test_post_query_returns_data_envelope() -> Result<()> {
    let response = app(true)
        .oneshot(graphql_post("{ filterExpenses(value: 3000) { name } }")?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(
        body["data"],
        json!({ "filterExpenses": [{ "name": "Rent" }, { "name": "Party" }] })
    );
    assert!(body.get("errors").is_none());
    Ok(())
}

#[tokio::test]
async fn test_post_invalid_query_returns_errors() -> Result<()> {
    let response = app(true)
        .oneshot(graphql_post("{ users { password } }")?)
        .await?;

    let body = body_json(response).await?;
    assert!(body["data"].is_null());
    assert!(body["errors"].as_array().map_or(false, |errors| !errors.is_empty()));
    Ok(())
}

#[tokio::test]
async fn test_post_mutation_adds_user() -> Result<()> {
    let response = app(true)
        .oneshot(graphql_post(r#"mutation { addUser(name: "Http User") { id name age } }"#)?)
        .await?;

    let body = body_json(response).await?;
    assert_eq!(
        body["data"]["addUser"],
        json!({ "id": 5, "name": "Http User", "age": null })
    );
    Ok(())
}

#[tokio::test]
async fn test_get_serves_graphiql_when_enabled() -> Result<()> {
    let response = app(true)
        .oneshot(Request::builder().uri("/graphql").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));

    let graphiql = app(true)
        .oneshot(Request::builder().uri("/graphiql").body(Body::empty())?)
        .await?;
    assert_eq!(graphiql.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_get_executes_query_when_graphiql_disabled() -> Result<()> {
    let response = app(false)
        .oneshot(
            Request::builder()
                .uri("/graphql?query=%7B%20users%20%7B%20id%20%7D%20%7D")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["data"]["users"].as_array().map(Vec::len), Some(4));

    let graphiql = app(false)
        .oneshot(Request::builder().uri("/graphiql").body(Body::empty())?)
        .await?;
    assert_eq!(graphiql.status(), StatusCode::NOT_FOUND);
    Ok(())
}
