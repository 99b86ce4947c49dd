//! User domain module.
//!
//! The User aggregate as the billing subsystem sees it: identity, role,
//! and the embedded subscription state.

mod aggregate;

pub use aggregate::User;
