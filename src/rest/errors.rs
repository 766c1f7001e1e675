//! Error types for resource operations.
//!
//! Three failure families reach callers of the resource pipeline:
//!
//! - [`MalformedField`]: a payload field had a JSON kind the declared schema
//!   does not accept (schema drift the client does not understand)
//! - [`ApiError`]: the server answered with a 4xx/5xx status
//! - [`ConnectionError`]: the transport never produced a response
//!
//! [`ResourceError`] unifies them together with request construction
//! failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ApiErrorKind, ResourceError};
//!
//! match Charge::retrieve(&client, "ch_123", None).await {
//!     Ok(charge) => println!("Charge amount: {:?}", charge.amount),
//!     Err(ResourceError::Api(e)) if e.kind() == ApiErrorKind::Card => {
//!         println!("Card declined: {:?}", e.decline_code);
//!     }
//!     Err(ResourceError::Connection(e)) => println!("Network trouble: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{ConnectionError, InvalidHttpRequestError};
use crate::rest::shape::JsonKind;

/// A payload field whose JSON kind does not match its declared kind.
///
/// `field` is a path from the decoded object's root, e.g. `items[1].parent`.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{JsonKind, MalformedField};
///
/// let error = MalformedField::new("request", "string or object", JsonKind::Number);
/// assert_eq!(
///     error.to_string(),
///     "Malformed field 'request': expected string or object, found number"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Malformed field '{field}': expected {expected}, found {found}")]
pub struct MalformedField {
    /// Path of the offending field.
    pub field: String,
    /// Description of the accepted kind(s).
    pub expected: String,
    /// The JSON kind actually found.
    pub found: JsonKind,
}

impl MalformedField {
    /// Creates a new `MalformedField` error.
    #[must_use]
    pub fn new(field: impl Into<String>, expected: impl Into<String>, found: JsonKind) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            found,
        }
    }
}

/// Broad classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Invalid parameters (400, 404).
    InvalidRequest,
    /// Missing or invalid API key (401).
    Authentication,
    /// The card could not be charged (402 or `card_error`).
    Card,
    /// The key lacks permission for the request (403).
    Permission,
    /// Too many requests (429).
    RateLimit,
    /// An idempotency key was reused with different parameters.
    Idempotency,
    /// Any other server-side failure.
    Api,
}

/// A structured error returned by the API for a 4xx/5xx response.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{ApiError, ApiErrorKind};
///
/// let body = r#"{"error": {"type": "card_error", "code": "card_declined", "message": "Your card was declined."}}"#;
/// let error = ApiError::from_response(402, body, Some("req_1"));
///
/// assert_eq!(error.code.as_deref(), Some("card_declined"));
/// assert_eq!(error.kind(), ApiErrorKind::Card);
/// assert_eq!(error.request_id.as_deref(), Some("req_1"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The error `type`, e.g. `invalid_request_error`.
    pub error_type: Option<String>,
    /// Machine-readable error code, e.g. `card_declined`.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// The offending parameter, if any.
    pub param: Option<String>,
    /// Issuer decline code for card errors.
    pub decline_code: Option<String>,
    /// Link to documentation about the error code.
    pub doc_url: Option<String>,
    /// The server-assigned request id.
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
    message: Option<String>,
    param: Option<String>,
    decline_code: Option<String>,
    doc_url: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx response.
    ///
    /// The body is expected to be `{"error": {...}}`. A body that cannot be
    /// parsed that way is kept verbatim as the message.
    #[must_use]
    pub fn from_response(status: u16, body: &str, request_id: Option<&str>) -> Self {
        let request_id = request_id.map(ToString::to_string);

        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => Self {
                status,
                error_type: error.error_type,
                code: error.code,
                message: error.message,
                param: error.param,
                decline_code: error.decline_code,
                doc_url: error.doc_url,
                request_id,
            },
            Err(_) => Self {
                status,
                error_type: None,
                code: None,
                message: (!body.is_empty()).then(|| body.to_string()),
                param: None,
                decline_code: None,
                doc_url: None,
                request_id,
            },
        }
    }

    /// Classifies the error from its type and status.
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self.error_type.as_deref() {
            Some("card_error") => return ApiErrorKind::Card,
            Some("idempotency_error") => return ApiErrorKind::Idempotency,
            _ => {}
        }

        match self.status {
            400 | 404 => ApiErrorKind::InvalidRequest,
            401 => ApiErrorKind::Authentication,
            402 => ApiErrorKind::Card,
            403 => ApiErrorKind::Permission,
            429 => ApiErrorKind::RateLimit,
            _ => ApiErrorKind::Api,
        }
    }
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The response payload did not match the declared schema.
    #[error(transparent)]
    MalformedField(#[from] MalformedField),

    /// The server rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No response was obtained.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// A 2xx response whose body is not a JSON document.
    #[error("Invalid response body: {message}")]
    InvalidResponse {
        /// Description of the parse failure.
        message: String,
        /// The server-assigned request id.
        request_id: Option<String>,
    },

    /// No path template matches the operation and available ids.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource or template being resolved.
        resource: String,
        /// The operation being attempted.
        operation: String,
    },

    /// Request parameters could not be serialized.
    #[error("Failed to encode request parameters: {message}")]
    Encode {
        /// Description of the failure.
        message: String,
    },

    /// The assembled HTTP request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl ResourceError {
    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.request_id.as_deref(),
            Self::InvalidResponse { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
    assert_send_sync::<ApiError>();
};
