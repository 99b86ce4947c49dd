//! User aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::billing::SubscriptionState;
use crate::domain::foundation::{Role, Timestamp, UserId, ValidationError};

/// User account as seen by the billing subsystem.
///
/// The account subsystem owns credentials, avatars, and password-reset
/// bookkeeping; billing reads the role and owns the embedded
/// `subscription` value.
///
/// # Invariants
///
/// - `subscription` is mutated only by the billing handlers
/// - An Admin never holds a subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user.
    pub id: UserId,

    /// Display name.
    pub full_name: String,

    /// Contact email.
    pub email: String,

    /// Platform role; admins are never billed.
    pub role: Role,

    /// Subscription bookkeeping.
    pub subscription: SubscriptionState,

    /// When the account was created.
    pub created_at: Timestamp,
}

impl User {
    /// Creates an account with the default USER role and no subscription.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or the email is malformed.
    pub fn new(
        id: UserId,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }

        let email = email.into();
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }

        Ok(Self {
            id,
            full_name,
            email,
            role: Role::default(),
            subscription: SubscriptionState::none(),
            created_at: Timestamp::now(),
        })
    }

    /// Sets the role, consuming and returning the user.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Returns true for platform administrators.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns true while the subscription status is exactly `"active"`.
    pub fn is_subscriber(&self) -> bool {
        self.subscription.is_active()
    }
}
