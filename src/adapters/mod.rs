//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `razorpay` - Razorpay payment gateway (plus a configurable mock)
//! - `memory` - In-memory store implementations (testing/development)

pub mod memory;
pub mod razorpay;

pub use memory::{InMemoryPaymentRecordStore, InMemoryUserStore};
pub use razorpay::{MockPaymentGateway, RazorpayConfig, RazorpayGatewayAdapter};
