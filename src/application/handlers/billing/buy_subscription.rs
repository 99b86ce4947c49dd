//! BuySubscriptionHandler - Command handler for starting a paid subscription.

use std::sync::Arc;

use tracing::debug;

use crate::domain::billing::{BillingError, SubscriptionStatus};
use crate::domain::foundation::UserId;
use crate::ports::{CreateSubscriptionRequest, PaymentGateway, UserStore};

/// Number of monthly billing cycles a new subscription runs for.
const BILLING_CYCLES: u32 = 12;

/// Command to start a paid subscription.
#[derive(Debug, Clone)]
pub struct BuySubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful subscription purchase.
#[derive(Debug, Clone)]
pub struct BuySubscriptionResult {
    pub subscription_id: String,
    pub status: SubscriptionStatus,
}

/// Handler for starting a paid subscription.
///
/// Creates a subscription on the payment gateway against the configured plan
/// and stores the returned `(id, status)` pair on the user. The user record
/// is not mutated when the gateway call fails.
pub struct BuySubscriptionHandler {
    user_store: Arc<dyn UserStore>,
    gateway: Arc<dyn PaymentGateway>,
    plan_id: String,
}

impl BuySubscriptionHandler {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        gateway: Arc<dyn PaymentGateway>,
        plan_id: impl Into<String>,
    ) -> Self {
        Self {
            user_store,
            gateway,
            plan_id: plan_id.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: BuySubscriptionCommand,
    ) -> Result<BuySubscriptionResult, BillingError> {
        // 1. Load the user
        let mut user = self
            .user_store
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| BillingError::unauthorized(cmd.user_id.clone()))?;

        // 2. Admins are never billed
        if user.is_admin() {
            return Err(BillingError::invalid_operation(user.role, "buy"));
        }

        // 3. Create the subscription on the gateway
        let subscription = self
            .gateway
            .create_subscription(CreateSubscriptionRequest {
                plan_id: self.plan_id.clone(),
                customer_notify: true,
                total_count: BILLING_CYCLES,
            })
            .await?;

        // 4. Store the gateway's (id, status) pair on the user
        user.subscription
            .attach(subscription.id.clone(), subscription.status.clone());
        self.user_store.save(&user).await?;

        debug!(
            user_id = %user.id,
            subscription_id = %subscription.id,
            "Subscription created"
        );

        Ok(BuySubscriptionResult {
            subscription_id: subscription.id,
            status: subscription.status,
        })
    }
}
