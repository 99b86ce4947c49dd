//! In-Memory User Store Adapter
//!
//! Stores user aggregates in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::UserStore;

/// In-memory storage for user aggregates
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored users (useful for tests)
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }

    /// Get the number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }

    async fn count_active_subscribers(&self) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.is_subscriber()).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::SubscriptionStatus;

    fn test_user(id: &str) -> User {
        User::new(UserId::new(id).unwrap(), "Test User", "test@example.com").unwrap()
    }

    fn active_subscriber(id: &str) -> User {
        let mut user = test_user(id);
        user.subscription
            .attach("sub_1", SubscriptionStatus::active());
        user
    }

    #[tokio::test]
    async fn test_memory_store_save_and_find() {
        let store = InMemoryUserStore::new();
        let user = test_user("user-1");

        store.save(&user).await.unwrap();

        let loaded = store.find_by_id(&user.id).await.unwrap();
        assert!(loaded.is_some());
        assert_eq!(loaded.unwrap().email, "test@example.com");
    }

    #[tokio::test]
    async fn test_memory_store_find_nonexistent() {
        let store = InMemoryUserStore::new();
        let id = UserId::new("user-missing").unwrap();

        let result = store.find_by_id(&id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_save_overwrites() {
        let store = InMemoryUserStore::new();
        let mut user = test_user("user-1");

        store.save(&user).await.unwrap();

        user.subscription
            .attach("sub_new", SubscriptionStatus::new("created"));
        store.save(&user).await.unwrap();

        let loaded = store.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(loaded.subscription.id(), Some("sub_new"));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_memory_store_count_all() {
        let store = InMemoryUserStore::new();

        store.save(&test_user("user-1")).await.unwrap();
        store.save(&test_user("user-2")).await.unwrap();
        store.save(&test_user("user-3")).await.unwrap();

        assert_eq!(store.count_all().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_memory_store_count_active_subscribers() {
        let store = InMemoryUserStore::new();

        store.save(&active_subscriber("user-1")).await.unwrap();
        store.save(&active_subscriber("user-2")).await.unwrap();
        store.save(&test_user("user-3")).await.unwrap();

        let mut lapsed = test_user("user-4");
        lapsed
            .subscription
            .attach("sub_4", SubscriptionStatus::new("cancelled"));
        store.save(&lapsed).await.unwrap();

        assert_eq!(store.count_all().await.unwrap(), 4);
        assert_eq!(store.count_active_subscribers().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_memory_store_clear() {
        let store = InMemoryUserStore::new();

        store.save(&test_user("user-1")).await.unwrap();
        store.save(&test_user("user-2")).await.unwrap();
        assert_eq!(store.user_count().await, 2);

        store.clear().await;

        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_memory_store_thread_safe() {
        let store = InMemoryUserStore::new();
        let user = test_user("user-shared");
        let id = user.id.clone();

        let store1 = store.clone();
        let store2 = store.clone();

        let handle1 = tokio::spawn(async move {
            store1.save(&user).await.unwrap();
        });

        let handle2 = tokio::spawn(async move {
            // Give first task a chance to write
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
            let loaded = store2.find_by_id(&id).await.unwrap();
            assert!(loaded.is_some());
        });

        handle1.await.unwrap();
        handle2.await.unwrap();
    }
}
