//! Role enum for account-level authorization decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a user account.
///
/// Admins operate the platform and are never billed; billing operations
/// reject them outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Returns true for platform administrators.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Returns true for accounts that may hold a subscription.
    pub fn can_subscribe(&self) -> bool {
        matches!(self, Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn is_admin_works_correctly() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn can_subscribe_works_correctly() {
        assert!(Role::User.can_subscribe());
        assert!(!Role::Admin.can_subscribe());
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", Role::User), "USER");
        assert_eq!(format!("{}", Role::Admin), "ADMIN");
    }

    #[test]
    fn serializes_to_screaming_snake_case_json() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn deserializes_from_screaming_snake_case_json() {
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);

        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
