//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `UserStore` - User aggregate persistence
//! - `PaymentRecordStore` - Verified payment record persistence
//!
//! ## Gateway Ports
//!
//! - `PaymentGateway` - External subscription billing provider

mod payment_gateway;
mod payment_record_store;
mod user_store;

pub use payment_gateway::{
    CreateSubscriptionRequest, GatewayError, GatewayErrorCode, GatewayRefund, GatewaySubscription,
    ListSubscriptionsQuery, PaymentGateway, RefundSpeed, SubscriptionPage,
};
pub use payment_record_store::PaymentRecordStore;
pub use user_store::UserStore;
