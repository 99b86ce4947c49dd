//! User store port (write side).
//!
//! Defines the contract for persisting and retrieving User aggregates.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Aggregate-focused**: Load, mutate, save whole users
//! - **Upsert semantics**: `save` overwrites the stored aggregate
//! - **Unique constraint**: One user per `UserId`
//!
//! # Example
//!
//! ```ignore
//! async fn activate_subscription(
//!     store: &dyn UserStore,
//!     user_id: &UserId,
//!     subscription_id: &str,
//! ) -> Result<(), DomainError> {
//!     let mut user = store
//!         .find_by_id(user_id)
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "No such user"))?;
//!
//!     user.subscription.set_status(SubscriptionStatus::active());
//!     store.save(&user).await?;
//!     Ok(())
//! }
//! ```

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Store port for User aggregate persistence.
///
/// Handles reads and writes for the billing lifecycle plus the
/// aggregate counts behind the user statistics query.
/// Implementations must ensure:
/// - Unique user_id constraint
/// - Full-aggregate writes (subscription state included)
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Save a user, overwriting any stored aggregate with the same ID.
    ///
    /// # Errors
    ///
    /// - `PersistenceError` on storage failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Count all users.
    async fn count_all(&self) -> Result<u64, DomainError>;

    /// Count users whose subscription status is exactly `"active"`.
    ///
    /// Any other status string, including other casings, does not count.
    async fn count_active_subscribers(&self) -> Result<u64, DomainError>;
}
