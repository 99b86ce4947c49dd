//! CancelSubscriptionHandler - Command handler for subscription cancellation.
//!
//! Cancellation always stops the billing cycle; the refund is gated by the
//! 14-day window. The steps run in a fixed order with documented
//! partial-failure points and no compensating rollback.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::billing::{days_since_payment, is_refund_eligible, BillingError};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{GatewayRefund, PaymentGateway, PaymentRecordStore, RefundSpeed, UserStore};

/// Command to cancel a user's subscription.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a fully completed cancellation, refund included.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionResult {
    pub refund: GatewayRefund,
}

/// Handler for cancelling a subscription.
///
/// Order of operations:
/// 1. load the user and enforce the role policy
/// 2. cancel on the gateway, persist the returned status
/// 3. locate the payment record for the subscription
/// 4. check the refund window
/// 5. refund the payment at optimum speed
/// 6. clear the user's subscription, persist, delete the record
///
/// A failure at any step halts the remaining steps. The gateway cancellation
/// in step 2 is not rolled back when a later step fails, so a user can end up
/// cancelled without a refund; `RefundWindowExpired` from step 4 is the
/// expected form of that outcome.
pub struct CancelSubscriptionHandler {
    user_store: Arc<dyn UserStore>,
    record_store: Arc<dyn PaymentRecordStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CancelSubscriptionHandler {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        record_store: Arc<dyn PaymentRecordStore>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            user_store,
            record_store,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancelSubscriptionResult, BillingError> {
        // 1. Load the user and enforce the role policy
        let mut user = self
            .user_store
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| BillingError::unauthorized(cmd.user_id.clone()))?;

        if user.is_admin() {
            return Err(BillingError::invalid_operation(user.role, "cancel"));
        }

        let subscription_id = match user.subscription.id() {
            Some(id) => id.to_string(),
            None => return Err(BillingError::no_subscription(cmd.user_id.clone())),
        };

        // 2. Cancel the billing cycle on the gateway and persist the
        //    gateway-reported status
        let cancelled = self.gateway.cancel_subscription(&subscription_id).await?;
        user.subscription.set_status(cancelled.status);
        self.user_store.save(&user).await?;

        // 3. Locate the payment record; absence means cancellation before any
        //    verified payment
        let record = self
            .record_store
            .find_by_subscription_id(&subscription_id)
            .await?
            .ok_or_else(|| BillingError::payment_record_not_found(subscription_id.clone()))?;

        // 4. Refunds are only issued within the window; the billing cycle
        //    stays cancelled either way
        let now = Timestamp::now();
        if !is_refund_eligible(&record.created_at, &now) {
            warn!(
                user_id = %user.id,
                subscription_id = %subscription_id,
                "Cancelled outside the refund window, no refund issued"
            );
            return Err(BillingError::refund_window_expired(days_since_payment(
                &record.created_at,
                &now,
            )));
        }

        // 5. Refund the verified payment
        let refund = self
            .gateway
            .refund_payment(&record.gateway_payment_id, RefundSpeed::Optimum)
            .await?;

        // 6. Clear the subscription and drop the consumed payment record
        user.subscription.clear();
        self.user_store.save(&user).await?;
        self.record_store.delete(&record.id).await?;

        debug!(
            user_id = %user.id,
            refund_id = %refund.id,
            "Subscription cancelled and refunded"
        );

        Ok(CancelSubscriptionResult { refund })
    }
}
