use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


const HOST: &str = "localhost";

/// Application router over a fresh in-memory database with both tables created.
async fn app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.unwrap();

    let app = router().with_state(AppState::new(db.clone()));

    (app, db)
}

/// Application router over a connected database with no schema, so every statement fails.
async fn app_without_tables() -> Router {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.unwrap();

    router().with_state(AppState::new(db))
}

/// Sends one request through the router and decodes the JSON response body.
///
/// An empty body decodes to `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, HOST);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}
