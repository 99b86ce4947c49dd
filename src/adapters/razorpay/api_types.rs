//! Razorpay-specific API types.
//!
//! These types represent Razorpay API objects as they appear in request and
//! response bodies. They are designed to:
//! - Parse actual Razorpay JSON accurately
//! - Map to the gateway port types for further processing
//! - Tolerate fields the API adds over time

use serde::{Deserialize, Serialize};

use crate::domain::billing::SubscriptionStatus;
use crate::ports::{GatewayRefund, GatewaySubscription};

// ════════════════════════════════════════════════════════════════════════════════
// Request Bodies
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /v1/subscriptions`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayCreateSubscriptionBody {
    /// Plan the subscription bills against (plan_...).
    pub plan_id: String,

    /// Whether Razorpay notifies the customer directly (wire format: 1 or 0).
    pub customer_notify: u8,

    /// Number of billing cycles the subscription runs for.
    pub total_count: u32,
}

/// Body for `POST /v1/payments/{id}/refund`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayRefundBody {
    /// Requested refund speed ("normal" or "optimum").
    pub speed: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Razorpay Object Types
// ════════════════════════════════════════════════════════════════════════════════

/// Razorpay Subscription object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpaySubscription {
    /// Unique subscription identifier (sub_...).
    pub id: String,

    /// Object type (always "subscription").
    #[serde(default)]
    pub entity: String,

    /// Plan the subscription bills against.
    pub plan_id: Option<String>,

    /// Subscription status (created, authenticated, active, halted, ...).
    pub status: String,

    /// When the subscription started (Unix timestamp). Null until the
    /// first charge is authorized.
    pub start_at: Option<i64>,

    /// When the subscription ends (Unix timestamp).
    pub end_at: Option<i64>,

    /// Total billing cycles configured.
    pub total_count: Option<u32>,

    /// Billing cycles already charged.
    #[serde(default)]
    pub paid_count: u32,

    /// Whether Razorpay notifies the customer directly.
    #[serde(default)]
    pub customer_notify: bool,

    /// Unix timestamp of creation.
    pub created_at: Option<i64>,

    /// Hosted page URL for authorizing the subscription.
    pub short_url: Option<String>,
}

impl From<RazorpaySubscription> for GatewaySubscription {
    fn from(sub: RazorpaySubscription) -> Self {
        Self {
            id: sub.id,
            status: SubscriptionStatus::new(sub.status),
            start_at: sub.start_at,
            plan_id: sub.plan_id,
        }
    }
}

/// Collection envelope for `GET /v1/subscriptions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpaySubscriptionCollection {
    /// Object type (always "collection").
    #[serde(default)]
    pub entity: String,

    /// Number of items in this page.
    #[serde(default)]
    pub count: u32,

    /// Subscriptions in this page, newest first.
    #[serde(default)]
    pub items: Vec<RazorpaySubscription>,
}

/// Razorpay Refund object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpayRefund {
    /// Unique refund identifier (rfnd_...).
    pub id: String,

    /// Object type (always "refund").
    #[serde(default)]
    pub entity: String,

    /// Payment the refund applies to (pay_...).
    pub payment_id: String,

    /// Refunded amount in the smallest currency unit.
    pub amount: Option<i64>,

    /// Currency of the refund (e.g., "INR").
    pub currency: Option<String>,

    /// Refund status (pending, processed, failed).
    pub status: String,

    /// Speed Razorpay actually processed the refund at.
    pub speed_processed: Option<String>,

    /// Speed requested when the refund was created.
    pub speed_requested: Option<String>,

    /// Unix timestamp of creation.
    pub created_at: Option<i64>,
}

impl From<RazorpayRefund> for GatewayRefund {
    fn from(refund: RazorpayRefund) -> Self {
        Self {
            id: refund.id,
            payment_id: refund.payment_id,
            status: refund.status,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Envelope
// ════════════════════════════════════════════════════════════════════════════════

/// Error envelope wrapping every Razorpay API failure response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpayErrorEnvelope {
    /// The error payload.
    pub error: RazorpayApiError,
}

/// Razorpay API error details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpayApiError {
    /// Provider error code (e.g., "BAD_REQUEST_ERROR").
    #[serde(default)]
    pub code: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Where the error originated (business, gateway, ...).
    pub source: Option<String>,

    /// Payment step the error occurred in.
    pub step: Option<String>,

    /// Machine-readable reason (e.g., "input_validation_failed").
    pub reason: Option<String>,

    /// Request field the error refers to, if any.
    pub field: Option<String>,
}
