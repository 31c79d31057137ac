#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use payments_api::config::AppConfig;
use payments_api::repo::payments_repo::PaymentsRepo;
use payments_api::store::memory::MemoryStore;
use payments_api::{router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        table_name: "Payments".to_string(),
        store_backend: "memory".to_string(),
        supported_currencies: ["AUD", "USD", "EUR", "GBP"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        get_max_age_secs: 300,
        list_max_age_secs: 120,
    }
}

pub fn app_with_store(store: MemoryStore) -> axum::Router {
    let state = AppState {
        config: test_config(),
        payments_repo: PaymentsRepo::new(Arc::new(store)),
    };
    router(state)
}

pub fn app() -> axum::Router {
    app_with_store(MemoryStore::new())
}

pub async fn send(
    app: axum::Router,
    req: Request<Body>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let res = app.oneshot(req).await.expect("request failed");
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = res
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, headers, body)
}

pub fn post_json(path: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed")
}

pub fn post_raw(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed")
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("request build failed")
}

pub fn get_with_if_none_match(path: &str, etag: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header("if-none-match", etag)
        .body(Body::empty())
        .expect("request build failed")
}
