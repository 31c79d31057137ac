use crate::domain::payment::{
    CreatePaymentRequest, CreatePaymentResponse, ErrorBody, ListPaymentsResponse,
};
use crate::domain::validate::validate;
use crate::http::response::{
    cached_response, etag_for, is_fresh, no_cache_response, not_modified,
};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use uuid::Uuid;

pub async fn create_payment(State(state): State<AppState>, body: Bytes) -> Response {
    let req: CreatePaymentRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(_) => {
            return no_cache_response(
                StatusCode::BAD_REQUEST,
                &ErrorBody::new("Malformed request body"),
            )
        }
    };

    // Any client-supplied id is discarded; the server assigns its own.
    let payment = match validate(Uuid::new_v4(), &req, &state.config.supported_currencies) {
        Ok(payment) => payment,
        Err(reason) => {
            return no_cache_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &ErrorBody::new(reason.to_string()),
            )
        }
    };

    match state.payments_repo.put(&payment).await {
        Ok(()) => no_cache_response(
            StatusCode::CREATED,
            &CreatePaymentResponse { result: payment.id },
        ),
        Err(err) => {
            tracing::error!(payment_id = %payment.id, error = %err, "create payment failed");
            internal_error()
        }
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let id = id.trim();
    if id.is_empty() {
        return no_cache_response(StatusCode::BAD_REQUEST, &ErrorBody::new("Missing payment id"));
    }
    let payment_id = match Uuid::parse_str(id) {
        Ok(payment_id) => payment_id,
        Err(_) => {
            return no_cache_response(
                StatusCode::BAD_REQUEST,
                &ErrorBody::new("Invalid payment id format"),
            )
        }
    };

    let payment = match state.payments_repo.get_by_id(payment_id).await {
        Ok(Some(payment)) => payment,
        Ok(None) => {
            return no_cache_response(StatusCode::NOT_FOUND, &ErrorBody::new("Payment not found"))
        }
        Err(err) => {
            // The id is logged for diagnosis, never echoed back.
            tracing::error!(payment_id = %payment_id, error = %err, "get payment failed");
            return internal_error();
        }
    };

    let body = match serde_json::to_vec(&payment) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(payment_id = %payment_id, error = %err, "payment serialization failed");
            return internal_error();
        }
    };
    let etag = etag_for(&body);
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok());

    if is_fresh(if_none_match, &etag) {
        not_modified(&etag, state.config.get_max_age_secs)
    } else {
        cached_response(StatusCode::OK, &payment, &etag, state.config.get_max_age_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub currency: Option<String>,
}

pub async fn list_payments(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let currency = match query.currency.as_deref().map(str::trim) {
        Some(currency) if !currency.is_empty() => currency,
        _ => {
            return no_cache_response(
                StatusCode::BAD_REQUEST,
                &ErrorBody::new("Missing currency parameter"),
            )
        }
    };
    if !state
        .config
        .supported_currencies
        .iter()
        .any(|c| c == currency)
    {
        return no_cache_response(
            StatusCode::BAD_REQUEST,
            &ErrorBody::new("Unsupported currency"),
        );
    }

    match state.payments_repo.scan(Some(currency)).await {
        Ok(payments) if payments.is_empty() => {
            no_cache_response(StatusCode::NOT_FOUND, &ErrorBody::new("No payments found"))
        }
        Ok(payments) => {
            let envelope = ListPaymentsResponse { data: payments };
            match serde_json::to_vec(&envelope) {
                Ok(body) => cached_response(
                    StatusCode::OK,
                    &envelope,
                    &etag_for(&body),
                    state.config.list_max_age_secs,
                ),
                Err(err) => {
                    tracing::error!(error = %err, "list serialization failed");
                    internal_error()
                }
            }
        }
        Err(err) => {
            tracing::error!(currency = %currency, error = %err, "list payments failed");
            internal_error()
        }
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn internal_error() -> Response {
    no_cache_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorBody::new("Internal server error"),
    )
}
