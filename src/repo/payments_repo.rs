use crate::domain::payment::Payment;
use crate::store::client::StoreClient;
use crate::store::retry::{with_retry, RetryPolicy};
use std::sync::Arc;
use uuid::Uuid;

/// The only storage failure handlers ever see. Storage-specific detail is
/// logged here and never crosses this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("payment store unavailable")]
    StoreUnavailable,
}

#[derive(Clone)]
pub struct PaymentsRepo {
    store: Arc<dyn StoreClient>,
    retry: RetryPolicy,
}

impl PaymentsRepo {
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self::with_retry_policy(store, RetryPolicy::default())
    }

    pub fn with_retry_policy(store: Arc<dyn StoreClient>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    /// Unconditional upsert by id. The id is server-generated, so a repeated
    /// put with the same id can only be a retry of the same create.
    pub async fn put(&self, payment: &Payment) -> Result<(), RepoError> {
        with_retry(&self.retry, || self.store.put_item(payment))
            .await
            .map_err(|err| {
                tracing::error!(payment_id = %payment.id, error = %err, "failed to store payment");
                RepoError::StoreUnavailable
            })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Payment>, RepoError> {
        with_retry(&self.retry, || self.store.get_item(id))
            .await
            .map_err(|err| {
                tracing::error!(payment_id = %id, error = %err, "failed to read payment");
                RepoError::StoreUnavailable
            })
    }

    pub async fn scan(&self, currency: Option<&str>) -> Result<Vec<Payment>, RepoError> {
        with_retry(&self.retry, || self.store.scan(currency))
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to scan payments");
                RepoError::StoreUnavailable
            })
    }
}
