use payments_api::config::AppConfig;
use payments_api::repo::payments_repo::PaymentsRepo;
use payments_api::store::client::StoreClient;
use payments_api::store::dynamo::DynamoStore;
use payments_api::store::memory::MemoryStore;
use payments_api::{router, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store: Arc<dyn StoreClient> = match cfg.store_backend.as_str() {
        "memory" => Arc::new(MemoryStore::new()),
        _ => Arc::new(DynamoStore::connect(cfg.table_name.clone()).await),
    };
    let payments_repo = PaymentsRepo::new(store);

    let state = AppState {
        config: cfg.clone(),
        payments_repo,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, table = %cfg.table_name, "payments api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
