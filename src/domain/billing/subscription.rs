//! Subscription bookkeeping embedded on the user record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway-reported lifecycle status of a subscription.
///
/// Statuses are opaque pass-through values owned by the gateway
/// ("created", "authenticated", "halted", ...). The only literal this
/// core interprets is `"active"`, which grants subscriber privileges.
/// A closed enum would silently drop statuses the gateway adds later,
/// so the value stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionStatus(String);

impl SubscriptionStatus {
    /// The single status literal interpreted by this core.
    pub const ACTIVE: &'static str = "active";

    /// Wraps a gateway-reported status value.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// The status granting subscriber privileges.
    pub fn active() -> Self {
        Self(Self::ACTIVE.to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true iff the status is exactly `"active"`.
    pub fn is_active(&self) -> bool {
        self.0 == Self::ACTIVE
    }
}

impl From<String> for SubscriptionStatus {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl From<&str> for SubscriptionStatus {
    fn from(status: &str) -> Self {
        Self(status.to_string())
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subscription fields embedded on the user record.
///
/// Both fields are absent until a subscription is purchased, and cleared
/// again when a refunded cancellation completes. Mutated only by the
/// billing handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionState {
    /// Gateway-issued subscription identifier.
    pub id: Option<String>,

    /// Gateway-reported lifecycle status.
    pub status: Option<SubscriptionStatus>,
}

impl SubscriptionState {
    /// An empty state, no subscription on record.
    pub fn none() -> Self {
        Self::default()
    }

    /// Records a newly created gateway subscription.
    pub fn attach(&mut self, id: impl Into<String>, status: SubscriptionStatus) {
        self.id = Some(id.into());
        self.status = Some(status);
    }

    /// Overwrites the status, keeping the subscription id.
    pub fn set_status(&mut self, status: SubscriptionStatus) {
        self.status = Some(status);
    }

    /// Removes both fields, leaving no subscription on record.
    pub fn clear(&mut self) {
        self.id = None;
        self.status = None;
    }

    /// Returns the subscription id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true iff the recorded status is exactly `"active"`.
    pub fn is_active(&self) -> bool {
        self.status.as_ref().map(|s| s.is_active()).unwrap_or(false)
    }
}
