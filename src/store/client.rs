use crate::domain::payment::Payment;
use async_trait::async_trait;
use uuid::Uuid;

/// Failure classification decided once at the storage edge, so the retry
/// layer never inspects error codes or message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Transient,
    Permanent,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub kind: FaultKind,
    pub message: String,
}

impl StoreError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Transient,
            message: message.into(),
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Permanent,
            message: message.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        self.kind == FaultKind::Transient
    }
}

/// Raw storage operations. Absence on a point read and an empty scan are
/// normal outcomes, not errors.
#[async_trait]
pub trait StoreClient: Send + Sync {
    async fn put_item(&self, payment: &Payment) -> Result<(), StoreError>;

    async fn get_item(&self, id: Uuid) -> Result<Option<Payment>, StoreError>;

    async fn scan(&self, currency: Option<&str>) -> Result<Vec<Payment>, StoreError>;
}
