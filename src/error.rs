//! Error types for the Stripe API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Stripe secret or restricted key.")]
    EmptyApiKey,

    /// API key contains whitespace.
    #[error("API key contains whitespace. Please check the key for stray spaces or newlines.")]
    MalformedApiKey,

    /// Webhook signing secret cannot be empty.
    #[error("Webhook secret cannot be empty. Please provide the endpoint's signing secret.")]
    EmptyWebhookSecret,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2020-08-27').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// API base URL is invalid.
    #[error("Invalid API base '{url}'. Please provide an absolute http(s) URL without a trailing path (e.g., 'https://api.stripe.com').")]
    InvalidApiBase {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Idempotency key is empty, too long, or not a valid header value.
    #[error("Invalid idempotency key: {reason}")]
    InvalidIdempotencyKey {
        /// The reason the key was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "2020-8".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("2020-8"));
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &error;
    }
}
