//! Common test utilities: service and router builders, HTTP helpers

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use coupons::domain::Service;
use coupons::infra::{InMemoryCouponStore, SeaOrmCouponStore};
use coupons::{Config, CouponsModule};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// Service over a fresh in-memory store, plus a handle to inspect the store
pub fn memory_service() -> (Arc<Service>, InMemoryCouponStore) {
    let store = InMemoryCouponStore::new();
    let module = CouponsModule::with_store(Arc::new(store.clone()));
    (module.service(), store)
}

/// Router over a fresh in-memory store
pub fn memory_app() -> (Router, InMemoryCouponStore) {
    let store = InMemoryCouponStore::new();
    let module = CouponsModule::with_store(Arc::new(store.clone()));
    (module.register_rest(Router::new()), store)
}

/// Router over a migrated in-memory SQLite database
pub async fn sqlite_app() -> Router {
    let cfg = Config {
        dsn: "sqlite::memory:".to_string(),
        ..Config::default()
    };
    let module = CouponsModule::init(&cfg)
        .await
        .expect("Failed to initialize coupons module on in-memory SQLite");
    module.register_rest(Router::new())
}

/// Coupon store over a migrated in-memory SQLite database
pub async fn sqlite_store() -> SeaOrmCouponStore {
    let cfg = Config {
        dsn: "sqlite::memory:".to_string(),
        ..Config::default()
    };
    let db = coupons::module::connect(&cfg)
        .await
        .expect("Failed to connect to in-memory SQLite");
    coupons::module::migrate(&db)
        .await
        .expect("Failed to run coupons migrations");
    SeaOrmCouponStore::new(Arc::new(db))
}

/// Response pieces a test cares about; `body` is `Null` for empty bodies
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse envelope JSON")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Number of coupons reported by the list endpoint
pub async fn listed_count(app: &Router) -> usize {
    let response = get(app, "/api/coupons").await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["result"].as_array().map(Vec::len).unwrap_or(0)
}
