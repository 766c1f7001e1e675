//! The narrow interface between the resource pipeline and the network.

use async_trait::async_trait;

use crate::clients::errors::ConnectionError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Performs a single HTTP exchange.
///
/// Implementations own authentication headers, TLS, timeouts, and any retry
/// policy. Any response that was received, whatever its status, is returned
/// as `Ok`; `Err` means no response was obtained.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use stripe_api::clients::{ConnectionError, HttpRequest, HttpResponse, Transport};
///
/// struct AlwaysDown;
///
/// #[async_trait]
/// impl Transport for AlwaysDown {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ConnectionError> {
///         Err(ConnectionError::Transport { message: "offline".to_string() })
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ConnectionError>;
}
