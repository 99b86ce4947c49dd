//! In-Memory Payment Record Store Adapter
//!
//! Stores verified payment records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::{DomainError, PaymentRecordId};
use crate::ports::PaymentRecordStore;

/// In-memory storage for payment records
#[derive(Debug, Clone)]
pub struct InMemoryPaymentRecordStore {
    records: Arc<RwLock<HashMap<PaymentRecordId, PaymentRecord>>>,
}

impl InMemoryPaymentRecordStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryPaymentRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRecordStore for InMemoryPaymentRecordStore {
    async fn create(&self, record: PaymentRecord) -> Result<PaymentRecord, DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_subscription_id(
        &self,
        subscription_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.gateway_subscription_id == subscription_id)
            .cloned())
    }

    async fn delete(&self, id: &PaymentRecordId) -> Result<(), DomainError> {
        self.records.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(payment_id: &str, subscription_id: &str) -> PaymentRecord {
        PaymentRecord::new(payment_id, subscription_id, "a".repeat(64)).unwrap()
    }

    #[tokio::test]
    async fn test_memory_store_create_and_find() {
        let store = InMemoryPaymentRecordStore::new();
        let record = test_record("pay_1", "sub_1");

        let stored = store.create(record.clone()).await.unwrap();
        assert_eq!(stored.id, record.id);

        let found = store.find_by_subscription_id("sub_1").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().gateway_payment_id, "pay_1");
    }

    #[tokio::test]
    async fn test_memory_store_find_nonexistent() {
        let store = InMemoryPaymentRecordStore::new();

        let result = store.find_by_subscription_id("sub_missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_find_matches_exactly() {
        let store = InMemoryPaymentRecordStore::new();
        store.create(test_record("pay_1", "sub_1")).await.unwrap();
        store.create(test_record("pay_2", "sub_2")).await.unwrap();

        let found = store.find_by_subscription_id("sub_2").await.unwrap();
        assert_eq!(found.unwrap().gateway_payment_id, "pay_2");

        let miss = store.find_by_subscription_id("sub_").await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_delete() {
        let store = InMemoryPaymentRecordStore::new();
        let record = test_record("pay_1", "sub_1");
        let id = record.id;

        store.create(record).await.unwrap();
        assert_eq!(store.record_count().await, 1);

        store.delete(&id).await.unwrap();

        assert_eq!(store.record_count().await, 0);
        assert!(store.find_by_subscription_id("sub_1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_delete_absent_record_is_ok() {
        let store = InMemoryPaymentRecordStore::new();

        let result = store.delete(&PaymentRecordId::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_memory_store_clear() {
        let store = InMemoryPaymentRecordStore::new();

        store.create(test_record("pay_1", "sub_1")).await.unwrap();
        store.create(test_record("pay_2", "sub_2")).await.unwrap();
        assert_eq!(store.record_count().await, 2);

        store.clear().await;

        assert_eq!(store.record_count().await, 0);
    }
}
