//! Configuration types for the Stripe API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Stripe.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StripeConfig`]: The main configuration struct holding all SDK settings
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`ApiVersion`]: The Stripe API version to pin
//! - [`IdempotencyKey`]: A validated caller-supplied idempotency key
//! - [`WebhookSecret`]: A webhook endpoint signing secret
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{StripeConfig, ApiKey, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ApiBase, ApiKey, IdempotencyKey, WebhookSecret, MAX_IDEMPOTENCY_KEY_LENGTH};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Configuration for the Stripe API SDK.
///
/// # Thread Safety
///
/// `StripeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use stripe_api::{StripeConfig, ApiKey, ApiBase};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .api_base(ApiBase::new("http://localhost:12111").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_base().as_ref(), "http://localhost:12111");
/// ```
#[derive(Clone, Debug)]
pub struct StripeConfig {
    api_key: ApiKey,
    api_base: ApiBase,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl StripeConfig {
    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the pinned API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout used by the HTTP transport.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for constructing [`StripeConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `api_base`: `https://api.stripe.com`
/// - `api_version`: [`ApiVersion::latest`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: [`DEFAULT_TIMEOUT`]
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL, e.g. a local mock server.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout for the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`StripeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(StripeConfig {
            api_key,
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = StripeConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert_eq!(config.api_base().as_ref(), "https://api.stripe.com");
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_base(ApiBase::new("http://localhost:12111").unwrap())
            .api_version(ApiVersion::V2019_12_03)
            .user_agent_prefix("MyPlugin/1.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2019_12_03);
        assert_eq!(config.api_base().as_ref(), "http://localhost:12111");
        assert_eq!(config.user_agent_prefix(), Some("MyPlugin/1.0"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_secretvalue").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StripeConfig"));
        assert!(!debug_str.contains("secretvalue"));
    }
}
