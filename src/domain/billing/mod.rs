//! Billing domain module.
//!
//! Subscription lifecycle, payment verification, refund policy, and the
//! monthly sales histogram.
//!
//! # Module Structure
//!
//! - `subscription` - Subscription state embedded on the user record
//! - `payment_record` - Persisted fact of a verified payment
//! - `signature` - HMAC payment signature verification
//! - `refund` - Refund window policy
//! - `stats` - Monthly payment histogram
//! - `errors` - Billing error kinds

mod errors;
mod payment_record;
mod refund;
mod signature;
mod stats;
mod subscription;

pub use errors::BillingError;
pub use payment_record::PaymentRecord;
pub use refund::{days_since_payment, is_refund_eligible, REFUND_WINDOW_DAYS};
pub use signature::PaymentSignatureVerifier;
pub use stats::{MonthlyHistogram, MONTH_NAMES};
pub use subscription::{SubscriptionState, SubscriptionStatus};
