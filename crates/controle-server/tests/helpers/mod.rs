//! Test helpers for Controle Interno server integration tests
//!
//! - In-memory database setup
//! - Router construction with the default configuration
//! - Request builders and JSON body decoding

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use controle_server::{
    actor::ACTOR_HEADER,
    api::{self, AppState},
    config::Config,
    db,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory database with migrations applied
pub async fn setup_test_db() -> SqlitePool {
    db::in_memory_pool()
        .await
        .expect("Failed to create in-memory database")
}

/// Full application router over the given pool
pub fn setup_test_app(pool: SqlitePool) -> Router {
    api::create_router(AppState { db: pool }, &Config::default().cors)
}

/// Record an access-log entry so `user` becomes a known actor
pub async fn register_user(pool: &SqlitePool, user: &str) {
    sqlx::query(
        "INSERT INTO access_logs (user_name, action, timestamp, origin_ip) \
         VALUES (?, 'Login', ?, '127.0.0.1')",
    )
    .bind(user)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .expect("Failed to register user");
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// Build a request, optionally naming an actor and carrying a JSON body
pub fn request(method: &str, uri: &str, actor: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder.header(ACTOR_HEADER, actor);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request and decode the JSON body (`Value::Null` when empty)
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, request("GET", uri, None, None)).await
}
