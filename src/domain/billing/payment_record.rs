//! Payment record entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentRecordId, Timestamp, ValidationError};

/// Persisted fact of a verified payment.
///
/// One record is created per successful signature verification. It is
/// looked up by `gateway_subscription_id` during cancellation and deleted
/// once a refund is issued.
///
/// # Invariants
///
/// - A record exists iff a signature was once successfully verified for
///   that subscription.
/// - At most one live record per subscription id is assumed; lookups use
///   single-result semantics and do not defend against duplicates.
/// - `created_at` is immutable and anchors the refund window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier for this record.
    pub id: PaymentRecordId,

    /// Gateway-issued payment identifier.
    pub gateway_payment_id: String,

    /// Gateway-issued subscription identifier.
    pub gateway_subscription_id: String,

    /// Signature that proved the payment authentic.
    pub gateway_signature: String,

    /// When the verified payment was recorded.
    pub created_at: Timestamp,
}

impl PaymentRecord {
    /// Creates a record for a just-verified payment.
    ///
    /// Identifier fields are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns error if any identifier is empty after trimming.
    pub fn new(
        gateway_payment_id: impl Into<String>,
        gateway_subscription_id: impl Into<String>,
        gateway_signature: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let gateway_payment_id = required_trimmed("gateway_payment_id", gateway_payment_id)?;
        let gateway_subscription_id =
            required_trimmed("gateway_subscription_id", gateway_subscription_id)?;
        let gateway_signature = required_trimmed("gateway_signature", gateway_signature)?;

        Ok(Self {
            id: PaymentRecordId::new(),
            gateway_payment_id,
            gateway_subscription_id,
            gateway_signature,
            created_at: Timestamp::now(),
        })
    }

    /// Rehydrates a record from stored fields.
    pub fn from_parts(
        id: PaymentRecordId,
        gateway_payment_id: impl Into<String>,
        gateway_subscription_id: impl Into<String>,
        gateway_signature: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            gateway_payment_id: gateway_payment_id.into(),
            gateway_subscription_id: gateway_subscription_id.into(),
            gateway_signature: gateway_signature.into(),
            created_at,
        }
    }
}

fn required_trimmed(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}
