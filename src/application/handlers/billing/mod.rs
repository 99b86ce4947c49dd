//! Billing handlers.
//!
//! Command and query handlers for the subscription lifecycle including:
//!
//! ## Commands
//! - Starting a paid subscription on the gateway
//! - Verifying a payment callback signature
//! - Cancelling a subscription with a windowed refund
//!
//! ## Queries
//! - Gateway publishable key
//! - Monthly payment statistics
//! - User statistics (admin)

mod buy_subscription;
mod cancel_subscription;
mod get_gateway_key;
mod get_payment_stats;
mod get_user_stats;
mod verify_subscription;

// Commands
pub use buy_subscription::{BuySubscriptionCommand, BuySubscriptionHandler, BuySubscriptionResult};
pub use cancel_subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
};
pub use verify_subscription::{
    VerifySubscriptionCommand, VerifySubscriptionHandler, VerifySubscriptionResult,
};

// Queries
pub use get_gateway_key::{GetGatewayKeyHandler, GetGatewayKeyQuery, GetGatewayKeyResult};
pub use get_payment_stats::{GetPaymentStatsHandler, GetPaymentStatsQuery, GetPaymentStatsResult};
pub use get_user_stats::{GetUserStatsHandler, GetUserStatsQuery, GetUserStatsResult};
