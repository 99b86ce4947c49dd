//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the CourseKit domain.

mod errors;
mod ids;
mod role;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PaymentRecordId, UserId};
pub use role::Role;
pub use timestamp::Timestamp;
