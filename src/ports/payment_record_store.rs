//! Payment record store port.
//!
//! Defines the contract for persisting verified payment records. A record is
//! written once at verification time and read back during cancellation to
//! decide refund eligibility.
//!
//! # Design
//!
//! - **Append-mostly**: Records are created and deleted, never updated
//! - **Subscription lookup**: Cancellation resolves records by the gateway
//!   subscription ID, not the record ID

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::{DomainError, PaymentRecordId};
use async_trait::async_trait;

/// Store port for payment record persistence.
///
/// Implementations must ensure:
/// - Unique record ID constraint
/// - `find_by_subscription_id` returns the record whose
///   `gateway_subscription_id` matches exactly
#[async_trait]
pub trait PaymentRecordStore: Send + Sync {
    /// Persist a new payment record.
    ///
    /// Returns the stored record.
    ///
    /// # Errors
    ///
    /// - `PersistenceError` on storage failure
    async fn create(&self, record: PaymentRecord) -> Result<PaymentRecord, DomainError>;

    /// Find the record for a gateway subscription ID.
    ///
    /// Returns `None` if no payment was recorded for that subscription.
    async fn find_by_subscription_id(
        &self,
        subscription_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError>;

    /// Delete a payment record.
    ///
    /// Deleting an absent record is not an error; the record is gone either way.
    async fn delete(&self, id: &PaymentRecordId) -> Result<(), DomainError>;
}
