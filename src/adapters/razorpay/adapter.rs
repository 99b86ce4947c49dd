//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Razorpay REST API.
//! Handles subscription creation, cancellation, refunds, and listing.
//!
//! # Security
//!
//! - API credentials are sent via HTTP basic auth (key id and key secret)
//! - The key secret is handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret);
//! let adapter = RazorpayGatewayAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CreateSubscriptionRequest, GatewayError, GatewayErrorCode, GatewayRefund, GatewaySubscription,
    ListSubscriptionsQuery, PaymentGateway, RefundSpeed, SubscriptionPage,
};

use super::api_types::{
    RazorpayCreateSubscriptionBody, RazorpayErrorEnvelope, RazorpayRefund, RazorpayRefundBody,
    RazorpaySubscription, RazorpaySubscriptionCollection,
};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Razorpay key id (rzp_test_... or rzp_live_...), the basic auth username.
    key_id: String,

    /// Razorpay key secret, the basic auth password.
    key_secret: SecretString,

    /// Base URL for the Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `RAZORPAY_KEY_ID`
    /// - `RAZORPAY_SECRET`
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let key_id = std::env::var("RAZORPAY_KEY_ID")?;
        let key_secret = std::env::var("RAZORPAY_SECRET")?;

        Ok(Self {
            key_id,
            key_secret: SecretString::new(key_secret),
            api_base_url: "https://api.razorpay.com".to_string(),
        })
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Razorpay payment gateway adapter.
///
/// Implements `PaymentGateway` for Razorpay API integration.
pub struct RazorpayGatewayAdapter {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGatewayAdapter {
    /// Create a new Razorpay adapter with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Classify an unsuccessful HTTP response into a gateway error.
    ///
    /// Razorpay wraps failures in an error envelope; its description and code
    /// are carried through when the body parses, the raw body otherwise.
    fn error_for(status: reqwest::StatusCode, body: &str) -> GatewayError {
        let (description, provider_code) = match serde_json::from_str::<RazorpayErrorEnvelope>(body)
        {
            Ok(envelope) => (envelope.error.description, Some(envelope.error.code)),
            Err(_) => (format!("Razorpay API error: {}", body), None),
        };

        let error = match status {
            reqwest::StatusCode::UNAUTHORIZED => GatewayError::authentication(description),
            reqwest::StatusCode::NOT_FOUND => {
                GatewayError::new(GatewayErrorCode::NotFound, description)
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                GatewayError::new(GatewayErrorCode::RateLimitExceeded, description)
            }
            s if s.is_client_error() => GatewayError::invalid_request(description),
            _ => GatewayError::provider(description),
        };

        match provider_code {
            Some(code) if !code.is_empty() => error.with_provider_code(code),
            _ => error,
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGatewayAdapter {
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<GatewaySubscription, GatewayError> {
        let url = format!("{}/v1/subscriptions", self.config.api_base_url);

        let body = RazorpayCreateSubscriptionBody {
            plan_id: request.plan_id.clone(),
            customer_notify: u8::from(request.customer_notify),
            total_count: request.total_count,
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Razorpay create_subscription failed");
            return Err(Self::error_for(status, &error_text));
        }

        let subscription: RazorpaySubscription = response.json().await.map_err(|e| {
            GatewayError::provider(format!("Failed to parse Razorpay response: {}", e))
        })?;

        Ok(subscription.into())
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<GatewaySubscription, GatewayError> {
        let url = format!(
            "{}/v1/subscriptions/{}/cancel",
            self.config.api_base_url, subscription_id
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::error_for(status, &error_text));
        }

        let subscription: RazorpaySubscription = response.json().await.map_err(|e| {
            GatewayError::provider(format!("Failed to parse Razorpay response: {}", e))
        })?;

        Ok(subscription.into())
    }

    async fn refund_payment(
        &self,
        payment_id: &str,
        speed: RefundSpeed,
    ) -> Result<GatewayRefund, GatewayError> {
        let url = format!(
            "{}/v1/payments/{}/refund",
            self.config.api_base_url, payment_id
        );

        let body = RazorpayRefundBody {
            speed: speed.as_str().to_string(),
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Razorpay refund_payment failed");
            return Err(Self::error_for(status, &error_text));
        }

        let refund: RazorpayRefund = response.json().await.map_err(|e| {
            GatewayError::provider(format!("Failed to parse Razorpay response: {}", e))
        })?;

        Ok(refund.into())
    }

    async fn list_subscriptions(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<SubscriptionPage, GatewayError> {
        let url = format!("{}/v1/subscriptions", self.config.api_base_url);

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .query(&[("count", query.count), ("skip", query.skip)])
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::error_for(status, &error_text));
        }

        let collection: RazorpaySubscriptionCollection = response.json().await.map_err(|e| {
            GatewayError::provider(format!("Failed to parse Razorpay response: {}", e))
        })?;

        Ok(SubscriptionPage {
            items: collection.items.into_iter().map(Into::into).collect(),
        })
    }
}
