//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for unit
//! and integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::billing::SubscriptionStatus;
use crate::ports::{
    CreateSubscriptionRequest, GatewayError, GatewayRefund, GatewaySubscription,
    ListSubscriptionsQuery, PaymentGateway, RefundSpeed, SubscriptionPage,
};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
///
/// // Configure responses
/// mock.set_subscription(GatewaySubscription { id: "sub_123".into(), ... });
///
/// // Inject errors
/// mock.set_error(GatewayError::network("Test outage"));
///
/// // Use in tests
/// let result = mock.create_subscription(request).await;
/// ```
#[derive(Default)]
pub struct MockPaymentGateway {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Known subscriptions by ID.
    subscriptions: HashMap<String, GatewaySubscription>,

    /// Next subscription to return from `create_subscription`.
    next_subscription: Option<GatewaySubscription>,

    /// Next refund to return from `refund_payment`.
    next_refund: Option<GatewayRefund>,

    /// Subscriptions served by `list_subscriptions`, newest first.
    listing: Vec<GatewaySubscription>,

    /// Error to return on next call.
    next_error: Option<GatewayError>,

    /// Specific errors by method name.
    method_errors: HashMap<String, GatewayError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    /// Create a new mock gateway with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with a pre-configured active subscription.
    pub fn with_active_subscription(subscription_id: &str) -> Self {
        let mock = Self::new();

        mock.add_subscription(GatewaySubscription {
            id: subscription_id.to_string(),
            status: SubscriptionStatus::active(),
            start_at: Some(chrono::Utc::now().timestamp()),
            plan_id: Some("plan_mock".to_string()),
        });

        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the subscription to return on the next `create_subscription` call.
    pub fn set_subscription(&self, subscription: GatewaySubscription) {
        self.inner.lock().unwrap().next_subscription = Some(subscription);
    }

    /// Add a subscription to the "database".
    pub fn add_subscription(&self, subscription: GatewaySubscription) {
        let id = subscription.id.clone();
        self.inner
            .lock()
            .unwrap()
            .subscriptions
            .insert(id, subscription);
    }

    /// Set the refund to return on the next `refund_payment` call.
    pub fn set_refund(&self, refund: GatewayRefund) {
        self.inner.lock().unwrap().next_refund = Some(refund);
    }

    /// Set the subscriptions served by `list_subscriptions`, newest first.
    pub fn set_subscription_listing(&self, subscriptions: Vec<GatewaySubscription>) {
        self.inner.lock().unwrap().listing = subscriptions;
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: GatewayError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.next_error = None;
        state.method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .any(|c| c.method == method)
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().call_log.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.inner.lock().unwrap().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self, method: &str) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().unwrap();

        // Check method-specific error first
        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        // Check global error (consumes it)
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

impl Clone for MockPaymentGateway {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<GatewaySubscription, GatewayError> {
        self.record_call(
            "create_subscription",
            vec![request.plan_id.clone(), request.total_count.to_string()],
        );
        self.check_error("create_subscription")?;

        let mut state = self.inner.lock().unwrap();

        let subscription = state
            .next_subscription
            .take()
            .unwrap_or_else(|| GatewaySubscription {
                id: format!(
                    "sub_mock_{}",
                    uuid::Uuid::new_v4().to_string().split('-').next().unwrap()
                ),
                status: SubscriptionStatus::new("created"),
                start_at: None,
                plan_id: Some(request.plan_id),
            });

        state
            .subscriptions
            .insert(subscription.id.clone(), subscription.clone());

        Ok(subscription)
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<GatewaySubscription, GatewayError> {
        self.record_call("cancel_subscription", vec![subscription_id.to_string()]);
        self.check_error("cancel_subscription")?;

        let mut state = self.inner.lock().unwrap();

        let subscription = state
            .subscriptions
            .get_mut(subscription_id)
            .ok_or_else(|| GatewayError::not_found("Subscription"))?;

        subscription.status = SubscriptionStatus::new("cancelled");

        Ok(subscription.clone())
    }

    async fn refund_payment(
        &self,
        payment_id: &str,
        speed: RefundSpeed,
    ) -> Result<GatewayRefund, GatewayError> {
        self.record_call(
            "refund_payment",
            vec![payment_id.to_string(), speed.to_string()],
        );
        self.check_error("refund_payment")?;

        let mut state = self.inner.lock().unwrap();

        let refund = state.next_refund.take().unwrap_or_else(|| GatewayRefund {
            id: format!(
                "rfnd_mock_{}",
                uuid::Uuid::new_v4().to_string().split('-').next().unwrap()
            ),
            payment_id: payment_id.to_string(),
            status: "processed".to_string(),
        });

        Ok(refund)
    }

    async fn list_subscriptions(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<SubscriptionPage, GatewayError> {
        self.record_call(
            "list_subscriptions",
            vec![query.count.to_string(), query.skip.to_string()],
        );
        self.check_error("list_subscriptions")?;

        let state = self.inner.lock().unwrap();

        let items = state
            .listing
            .iter()
            .skip(query.skip as usize)
            .take(query.count as usize)
            .cloned()
            .collect();

        Ok(SubscriptionPage { items })
    }
}
