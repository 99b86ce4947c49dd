//! Payment gateway port for external subscription billing.
//!
//! Defines the contract for payment gateway integrations (e.g., Razorpay).
//! Implementations handle actual subscription creation, cancellation,
//! refunds, and listing.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any subscription billing provider
//! - **Opaque statuses**: Provider status strings pass through untranslated
//! - **Thin**: Only the operations the billing lifecycle needs

use crate::domain::billing::{BillingError, SubscriptionStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment gateway integrations.
///
/// Covers the subscription lifecycle: create on subscribe, cancel on
/// cancellation, refund within the refund window, and list for payment
/// statistics.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a recurring subscription on the gateway.
    ///
    /// Returns the gateway's subscription record including its ID and
    /// initial status.
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<GatewaySubscription, GatewayError>;

    /// Cancel a subscription on the gateway.
    ///
    /// Returns the updated subscription record with the gateway's
    /// post-cancellation status.
    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<GatewaySubscription, GatewayError>;

    /// Refund a captured payment.
    async fn refund_payment(
        &self,
        payment_id: &str,
        speed: RefundSpeed,
    ) -> Result<GatewayRefund, GatewayError>;

    /// List subscriptions known to the gateway, newest first.
    async fn list_subscriptions(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<SubscriptionPage, GatewayError>;
}

/// Request to create a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Gateway plan the subscription bills against.
    pub plan_id: String,

    /// Whether the gateway notifies the customer directly.
    pub customer_notify: bool,

    /// Number of billing cycles the subscription runs for.
    pub total_count: u32,
}

/// Subscription record as reported by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySubscription {
    /// Gateway's subscription ID.
    pub id: String,

    /// Gateway-reported status, passed through verbatim.
    pub status: SubscriptionStatus,

    /// When the subscription started (Unix seconds), if the gateway knows.
    pub start_at: Option<i64>,

    /// Plan the subscription bills against, if reported.
    pub plan_id: Option<String>,
}

/// Refund record as reported by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRefund {
    /// Gateway's refund ID.
    pub id: String,

    /// Payment the refund applies to.
    pub payment_id: String,

    /// Gateway-reported refund status.
    pub status: String,
}

/// How quickly a refund should be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundSpeed {
    /// Standard settlement timeline.
    Normal,

    /// Fastest settlement the gateway supports.
    Optimum,
}

impl RefundSpeed {
    /// Wire value for the gateway API.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundSpeed::Normal => "normal",
            RefundSpeed::Optimum => "optimum",
        }
    }
}

impl std::fmt::Display for RefundSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query parameters for listing subscriptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListSubscriptionsQuery {
    /// Maximum number of subscriptions to return.
    pub count: u32,

    /// Number of subscriptions to skip from the newest.
    pub skip: u32,
}

/// One page of gateway subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPage {
    /// Subscriptions in this page, newest first.
    pub items: Vec<GatewaySubscription>,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::AuthenticationError, message)
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(resource: &str) -> Self {
        Self::new(
            GatewayErrorCode::NotFound,
            format!("{} not found", resource),
        )
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for BillingError {
    fn from(err: GatewayError) -> Self {
        BillingError::gateway(err.to_string())
    }
}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Request rejected by the gateway.
    InvalidRequest,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl GatewayErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayErrorCode::NetworkError | GatewayErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::AuthenticationError => "authentication_error",
            GatewayErrorCode::InvalidRequest => "invalid_request",
            GatewayErrorCode::NotFound => "not_found",
            GatewayErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            GatewayErrorCode::ProviderError => "provider_error",
            GatewayErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
