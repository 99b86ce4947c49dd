//! GetUserStatsHandler - Query handler for admin user statistics.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::ports::UserStore;

/// Query to get user statistics.
///
/// This is an admin-only query for dashboard displays; the HTTP layer owns
/// the role check.
#[derive(Debug, Clone)]
pub struct GetUserStatsQuery;

/// Aggregate user counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserStatsResult {
    pub total_users: u64,
    pub subscribed_users: u64,
}

/// Handler for retrieving user statistics.
pub struct GetUserStatsHandler {
    user_store: Arc<dyn UserStore>,
}

impl GetUserStatsHandler {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    pub async fn handle(
        &self,
        _query: GetUserStatsQuery,
    ) -> Result<GetUserStatsResult, BillingError> {
        let total_users = self.user_store.count_all().await?;
        let subscribed_users = self.user_store.count_active_subscribers().await?;

        Ok(GetUserStatsResult {
            total_users,
            subscribed_users,
        })
    }
}
