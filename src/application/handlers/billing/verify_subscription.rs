//! VerifySubscriptionHandler - Command handler for payment verification.
//!
//! Confirms that a payment callback genuinely originated from the gateway by
//! recomputing the HMAC signature, then records the payment and activates the
//! user's subscription.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::billing::{
    BillingError, PaymentRecord, PaymentSignatureVerifier, SubscriptionStatus,
};
use crate::domain::foundation::UserId;
use crate::ports::{PaymentRecordStore, UserStore};

/// Command carrying the gateway's payment callback fields.
#[derive(Debug, Clone)]
pub struct VerifySubscriptionCommand {
    pub user_id: UserId,
    pub gateway_payment_id: String,
    pub gateway_subscription_id: String,
    pub gateway_signature: String,
}

/// Result of a successful verification.
#[derive(Debug, Clone)]
pub struct VerifySubscriptionResult {
    pub record: PaymentRecord,
}

/// Handler for verifying a subscription payment.
///
/// The signature digest binds the subscription id stored on the user record,
/// never the caller-supplied one. A caller who substitutes someone else's
/// subscription id cannot produce a matching signature without the secret.
pub struct VerifySubscriptionHandler {
    user_store: Arc<dyn UserStore>,
    record_store: Arc<dyn PaymentRecordStore>,
    verifier: PaymentSignatureVerifier,
}

impl VerifySubscriptionHandler {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        record_store: Arc<dyn PaymentRecordStore>,
        verifier: PaymentSignatureVerifier,
    ) -> Self {
        Self {
            user_store,
            record_store,
            verifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifySubscriptionCommand,
    ) -> Result<VerifySubscriptionResult, BillingError> {
        // 1. Load the user
        let mut user = self
            .user_store
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| BillingError::unauthorized(cmd.user_id.clone()))?;

        // 2. The digest binds the stored subscription id; without one there is
        //    nothing a signature could prove
        let stored_subscription_id = match user.subscription.id() {
            Some(id) => id.to_string(),
            None => return Err(BillingError::verification_failed()),
        };

        if cmd.gateway_subscription_id != stored_subscription_id {
            warn!(
                user_id = %user.id,
                supplied = %cmd.gateway_subscription_id,
                "Caller-supplied subscription id differs from the stored one"
            );
        }

        // 3. Recompute the signature over payment_id|stored_subscription_id
        if !self.verifier.verify(
            &cmd.gateway_payment_id,
            &stored_subscription_id,
            &cmd.gateway_signature,
        ) {
            return Err(BillingError::verification_failed());
        }

        // 4. Record the verified payment
        let record = PaymentRecord::new(
            cmd.gateway_payment_id,
            stored_subscription_id,
            cmd.gateway_signature,
        )
        .map_err(|e| BillingError::persistence(e.to_string()))?;
        let record = self.record_store.create(record).await?;

        // 5. Activate the subscription
        user.subscription.set_status(SubscriptionStatus::active());
        self.user_store.save(&user).await?;

        debug!(
            user_id = %user.id,
            payment_id = %record.gateway_payment_id,
            "Payment verified, subscription active"
        );

        Ok(VerifySubscriptionResult { record })
    }
}
