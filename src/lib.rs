pub mod config;
pub mod domain {
    pub mod payment;
    pub mod validate;
}
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
    pub mod response;
}
pub mod repo {
    pub mod payments_repo;
}
pub mod store {
    pub mod client;
    pub mod dynamo;
    pub mod memory;
    pub mod retry;
}

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub payments_repo: repo::payments_repo::PaymentsRepo,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/payments",
            post(http::handlers::payments::create_payment)
                .get(http::handlers::payments::list_payments),
        )
        .route("/payments/{id}", get(http::handlers::payments::get_payment))
        .route("/health", get(http::handlers::payments::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
