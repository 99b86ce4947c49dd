//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COURSEKIT_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use coursekit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Gateway key: {}", config.billing.razorpay_key_id);
//! ```

mod billing;
mod error;

pub use billing::BillingConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the CourseKit backend.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Billing configuration (Razorpay)
    pub billing: BillingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COURSEKIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COURSEKIT__BILLING__RAZORPAY_KEY_ID=rzp_test_xxx` -> `billing.razorpay_key_id`
    /// - `COURSEKIT__BILLING__RAZORPAY_PLAN_ID=plan_xxx` -> `billing.razorpay_plan_id`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COURSEKIT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Required Razorpay credentials are present
    /// - Gateway id prefixes match the provider's formats
    /// - API base URL is well formed
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.billing.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var("COURSEKIT__BILLING__RAZORPAY_KEY_ID", "rzp_test_abc123");
        env::set_var("COURSEKIT__BILLING__RAZORPAY_KEY_SECRET", "secret123");
        env::set_var("COURSEKIT__BILLING__RAZORPAY_PLAN_ID", "plan_monthly");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("COURSEKIT__BILLING__RAZORPAY_KEY_ID");
        env::remove_var("COURSEKIT__BILLING__RAZORPAY_KEY_SECRET");
        env::remove_var("COURSEKIT__BILLING__RAZORPAY_PLAN_ID");
        env::remove_var("COURSEKIT__BILLING__API_BASE_URL");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.billing.razorpay_key_id, "rzp_test_abc123");
        assert_eq!(config.billing.razorpay_plan_id, "plan_monthly");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.billing.api_base_url, "https://api.razorpay.com");
    }

    #[test]
    fn test_custom_base_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var(
            "COURSEKIT__BILLING__API_BASE_URL",
            "http://localhost:9090",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.billing.api_base_url, "http://localhost:9090");
    }

    #[test]
    fn test_test_mode_detection() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.billing.is_test_mode());
        assert!(!config.billing.is_live_mode());
    }
}
