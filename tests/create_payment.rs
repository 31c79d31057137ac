mod common;

use axum::http::StatusCode;
use common::{app, app_with_store, get, post_json, post_raw, send};
use payments_api::store::client::StoreError;
use payments_api::store::memory::MemoryStore;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn create_returns_fresh_id_and_ignores_client_id() {
    let app = app();

    let (status, _, body) = send(
        app.clone(),
        post_json(
            "/payments",
            &json!({"id": "client-chosen", "amount": 100, "currency": "AUD"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["result"].as_str().expect("result id").to_string();
    assert_ne!(id, "client-chosen");
    Uuid::parse_str(&id).expect("server id is a uuid");

    let (status, _, body) = send(
        app,
        post_json("/payments", &json!({"amount": 100, "currency": "AUD"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["result"].as_str().expect("result id"), id);
}

#[tokio::test]
async fn create_response_is_not_cacheable() {
    let (status, headers, _) = send(
        app(),
        post_json("/payments", &json!({"amount": 5, "currency": "USD"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        headers["cache-control"],
        "no-cache, no-store, must-revalidate"
    );
    assert!(headers.get("etag").is_none());
}

#[tokio::test]
async fn zero_amount_is_rejected_before_the_store() {
    let app = app();

    let (status, _, body) = send(
        app.clone(),
        post_json("/payments", &json!({"amount": 0, "currency": "AUD"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Amount must be greater than 0");

    // Nothing was written: a supported-currency list finds no records.
    let (status, _, _) = send(app, get("/payments?currency=AUD")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_amount_is_rejected() {
    let (status, _, body) = send(
        app(),
        post_json("/payments", &json!({"amount": -12.5, "currency": "AUD"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Amount must be greater than 0");
}

#[tokio::test]
async fn unsupported_currency_is_rejected_before_the_store() {
    let app = app();

    let (status, _, body) = send(
        app.clone(),
        post_json("/payments", &json!({"amount": 10, "currency": "XYZ"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Unsupported currency");

    let (status, _, _) = send(app, get("/payments?currency=EUR")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_fields_fail_validation_not_parsing() {
    let (status, _, body) = send(app(), post_json("/payments", &json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid payment object");

    let (status, _, body) = send(
        app(),
        post_json("/payments", &json!({"currency": "AUD"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid payment object");
}

#[tokio::test]
async fn wrong_typed_amount_fails_validation_not_parsing() {
    let (status, _, body) = send(
        app(),
        post_json("/payments", &json!({"amount": "100", "currency": "AUD"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid payment object");
}

#[tokio::test]
async fn non_string_client_id_is_still_ignored() {
    let (status, _, body) = send(
        app(),
        post_json(
            "/payments",
            &json!({"id": 123, "amount": 100, "currency": "AUD"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["result"].as_str().expect("result id");
    Uuid::parse_str(id).expect("server id is a uuid");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (status, _, body) = send(app(), post_raw("/payments", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Malformed request body");
}

#[tokio::test]
async fn store_failure_collapses_to_generic_500() {
    let store = MemoryStore::new();
    store.inject_fault(StoreError::permanent("table does not exist"));

    let (status, _, body) = send(
        app_with_store(store),
        post_json("/payments", &json!({"amount": 100, "currency": "AUD"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}
