//! Billing configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

/// Billing configuration (Razorpay)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingConfig {
    /// Razorpay key id (rzp_test_... or rzp_live_...), safe to expose to clients
    pub razorpay_key_id: String,

    /// Razorpay key secret, used for API auth and payment signature digests
    pub razorpay_key_secret: String,

    /// Razorpay plan the subscription bills against
    pub razorpay_plan_id: String,

    /// Base URL for the Razorpay API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl BillingConfig {
    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_test_")
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_live_")
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.razorpay_key_id.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"));
        }
        if self.razorpay_key_secret.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"));
        }
        if self.razorpay_plan_id.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_PLAN_ID"));
        }

        // Verify id prefixes for safety
        if !self.razorpay_key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidGatewayKeyId);
        }
        if !self.razorpay_plan_id.starts_with("plan_") {
            return Err(ValidationError::InvalidGatewayPlanId);
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::InvalidApiBaseUrl);
        }

        Ok(())
    }
}
