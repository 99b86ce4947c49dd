//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `user` - User aggregate with role and embedded subscription state
//! - `billing` - Subscription lifecycle, payment verification, refunds, stats

pub mod billing;
pub mod foundation;
pub mod user;
