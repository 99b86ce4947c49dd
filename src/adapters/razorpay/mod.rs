//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Razorpay integration, including:
//! - Subscription creation and cancellation
//! - Payment refunds
//! - Subscription listing for payment statistics
//!
//! # Security
//!
//! - API credentials are sent via HTTP basic auth (key id and key secret)
//! - The key secret is handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! Required environment variables:
//! - `RAZORPAY_KEY_ID`: Razorpay key id (rzp_test_... or rzp_live_...)
//! - `RAZORPAY_SECRET`: Razorpay key secret

mod adapter;
mod api_types;
mod mock_gateway;

pub use adapter::{RazorpayConfig, RazorpayGatewayAdapter};
pub use api_types::{
    RazorpayApiError, RazorpayErrorEnvelope, RazorpayRefund, RazorpaySubscription,
    RazorpaySubscriptionCollection,
};
pub use mock_gateway::MockPaymentGateway;
