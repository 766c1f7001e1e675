//! Webhook-specific error types.
//!
//! - [`WebhookError::InvalidHeader`]: the signature header cannot be parsed
//! - [`WebhookError::NoValidSignature`]: no `v1` signature matches the payload
//! - [`WebhookError::TimestampOutsideTolerance`]: the signed timestamp is too old
//! - [`WebhookError::Decode`]: the verified payload is not a valid event
//!
//! # Example
//!
//! ```rust
//! use stripe_api::webhooks::WebhookError;
//!
//! let error = WebhookError::TimestampOutsideTolerance { timestamp: 1_600_000_000, tolerance: 300 };
//! assert!(error.to_string().contains("tolerance"));
//! ```

use thiserror::Error;

use crate::rest::ResourceError;

/// Error type for webhook verification and event construction.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature header is missing its timestamp or any `v1` entry.
    #[error("Unable to extract timestamp and signatures from header: {message}")]
    InvalidHeader {
        /// What was wrong with the header.
        message: String,
    },

    /// None of the `v1` signatures matches the expected signature.
    ///
    /// The message is intentionally generic.
    #[error("No signatures found matching the expected signature for payload")]
    NoValidSignature,

    /// The signed timestamp is older than the tolerance allows.
    #[error("Timestamp {timestamp} outside the tolerance zone of {tolerance} seconds")]
    TimestampOutsideTolerance {
        /// The signed timestamp (unix seconds).
        timestamp: i64,
        /// The tolerance that was applied, in seconds.
        tolerance: i64,
    },

    /// The payload was authentic but could not be decoded as an event.
    #[error("Webhook payload could not be decoded: {0}")]
    Decode(#[from] ResourceError),
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebhookError>();
};
