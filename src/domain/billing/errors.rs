//! Billing-specific error types.
//!
//! Errors raised by the subscription lifecycle: purchase, payment
//! verification, cancellation, and refunds.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Unauthorized | 401 |
//! | InvalidOperation | 400 |
//! | VerificationFailed | 400 |
//! | PaymentRecordNotFound | 404 |
//! | NoSubscription | 404 |
//! | RefundWindowExpired | 400 |
//! | Gateway | 502 |
//! | Persistence | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, Role, UserId};

/// Billing-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// Caller does not resolve to a known user.
    Unauthorized(UserId),

    /// Role policy forbids the operation (admins are never billed).
    InvalidOperation { role: Role, operation: String },

    /// Payment signature did not match the expected digest.
    VerificationFailed,

    /// No payment record exists for this subscription.
    PaymentRecordNotFound(String),

    /// The user has no subscription on record.
    NoSubscription(UserId),

    /// Cancellation requested after the refund window closed.
    RefundWindowExpired { days_since_payment: i64 },

    /// The payment gateway reported a failure.
    Gateway { message: String },

    /// A backing store failed to read or write.
    Persistence { message: String },
}

impl BillingError {
    // Constructor functions for cleaner error creation

    pub fn unauthorized(user_id: UserId) -> Self {
        BillingError::Unauthorized(user_id)
    }

    pub fn invalid_operation(role: Role, operation: impl Into<String>) -> Self {
        BillingError::InvalidOperation {
            role,
            operation: operation.into(),
        }
    }

    pub fn verification_failed() -> Self {
        BillingError::VerificationFailed
    }

    pub fn payment_record_not_found(subscription_id: impl Into<String>) -> Self {
        BillingError::PaymentRecordNotFound(subscription_id.into())
    }

    pub fn no_subscription(user_id: UserId) -> Self {
        BillingError::NoSubscription(user_id)
    }

    pub fn refund_window_expired(days_since_payment: i64) -> Self {
        BillingError::RefundWindowExpired { days_since_payment }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        BillingError::Gateway {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        BillingError::Persistence {
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::Unauthorized(_) => ErrorCode::Unauthorized,
            BillingError::InvalidOperation { .. } => ErrorCode::InvalidOperation,
            BillingError::VerificationFailed => ErrorCode::VerificationFailed,
            BillingError::PaymentRecordNotFound(_) | BillingError::NoSubscription(_) => {
                ErrorCode::PaymentRecordNotFound
            }
            BillingError::RefundWindowExpired { .. } => ErrorCode::RefundWindowExpired,
            BillingError::Gateway { .. } => ErrorCode::PaymentGatewayError,
            BillingError::Persistence { .. } => ErrorCode::PersistenceError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            BillingError::Unauthorized(user_id) => {
                format!("Unauthorized: no user found for id {}", user_id)
            }
            BillingError::InvalidOperation { role, operation } => {
                format!("{} accounts cannot {} a subscription", role, operation)
            }
            BillingError::VerificationFailed => {
                "Payment could not be verified, please try again or contact support".to_string()
            }
            BillingError::PaymentRecordNotFound(subscription_id) => {
                format!("No payment record found for subscription {}", subscription_id)
            }
            BillingError::NoSubscription(user_id) => {
                format!("User {} has no subscription on record", user_id)
            }
            BillingError::RefundWindowExpired { days_since_payment } => {
                format!(
                    "Refund period is over ({} days since payment), no refund can be issued",
                    days_since_payment
                )
            }
            BillingError::Gateway { message } => format!("Payment gateway error: {}", message),
            BillingError::Persistence { message } => format!("Storage error: {}", message),
        }
    }

    /// Returns true when the failure is a client or business condition
    /// rather than an infrastructure fault.
    pub fn is_client_fault(&self) -> bool {
        !matches!(
            self,
            BillingError::Gateway { .. } | BillingError::Persistence { .. }
        )
    }

    /// Returns true if re-issuing the request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BillingError::Gateway { .. } | BillingError::Persistence { .. }
        )
    }
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BillingError {}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::PaymentGatewayError => BillingError::gateway(err.message),
            _ => BillingError::persistence(err.to_string()),
        }
    }
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
