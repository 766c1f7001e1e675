//! Transport-level error types for the Stripe API SDK.
//!
//! This module contains the errors a [`Transport`](crate::clients::Transport)
//! can report and the validation errors raised for malformed requests before
//! they are sent.
//!
//! # Error Handling
//!
//! - [`ConnectionError`]: no usable HTTP response was obtained (DNS failure,
//!   refused connection, timeout, body read failure)
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//!
//! Non-2xx responses are *not* transport errors: the transport returns them
//! as ordinary [`HttpResponse`](crate::clients::HttpResponse) values and the
//! resource layer turns them into [`ApiError`](crate::rest::ApiError)s.

use thiserror::Error;

/// Error returned when no HTTP response could be obtained.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::ConnectionError;
///
/// let error = ConnectionError::Transport {
///     message: "connection reset by peer".to_string(),
/// };
/// assert!(error.to_string().contains("connection reset"));
/// assert!(!error.is_timeout());
/// ```
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The underlying HTTP client failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A transport reported a failure without an underlying HTTP client error.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },

    /// The request was rejected before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl ConnectionError {
    /// Returns `true` if the failure was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with get requests.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A body was attached to a method that carries its parameters in the query.
    #[error("Cannot send a body with {method} requests.")]
    BodyNotAllowed {
        /// The HTTP method that does not accept a body.
        method: String,
    },

    /// The URL is not absolute.
    #[error("Request URL '{url}' is not an absolute http(s) URL.")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },
}
