use crate::domain::payment::Payment;
use crate::store::client::{StoreClient, StoreError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// In-memory store for local development and tests. Queued faults are
/// consumed one per operation before the operation itself runs, so tests
/// can script transient and permanent failure sequences.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<Uuid, Payment>>>,
    faults: Arc<Mutex<VecDeque<StoreError>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inject_fault(&self, err: StoreError) {
        if let Ok(mut faults) = self.faults.lock() {
            faults.push_back(err);
        }
    }

    fn next_fault(&self) -> Option<StoreError> {
        self.faults.lock().ok().and_then(|mut faults| faults.pop_front())
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn put_item(&self, payment: &Payment) -> Result<(), StoreError> {
        if let Some(err) = self.next_fault() {
            return Err(err);
        }
        let mut items = self
            .items
            .write()
            .map_err(|e| StoreError::permanent(format!("lock poisoned: {e}")))?;
        items.insert(payment.id, payment.clone());
        Ok(())
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<Payment>, StoreError> {
        if let Some(err) = self.next_fault() {
            return Err(err);
        }
        let items = self
            .items
            .read()
            .map_err(|e| StoreError::permanent(format!("lock poisoned: {e}")))?;
        Ok(items.get(&id).cloned())
    }

    async fn scan(&self, currency: Option<&str>) -> Result<Vec<Payment>, StoreError> {
        if let Some(err) = self.next_fault() {
            return Err(err);
        }
        let items = self
            .items
            .read()
            .map_err(|e| StoreError::permanent(format!("lock poisoned: {e}")))?;
        Ok(items
            .values()
            .filter(|p| currency.is_none_or(|c| p.currency == c))
            .cloned()
            .collect())
    }
}
