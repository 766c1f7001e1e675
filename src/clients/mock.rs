//! Scripted in-memory transport for offline tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::clients::errors::ConnectionError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;

/// A [`Transport`] that replays queued responses and records every request.
///
/// Clones share the same queue and request log, so a test can keep one handle
/// for assertions while the client owns another.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::{MockTransport, HttpResponse};
/// use serde_json::json;
///
/// let transport = MockTransport::new()
///     .with_json(200, json!({"id": "cus_1", "object": "customer"}));
/// assert_eq!(transport.pending(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

#[derive(Debug, Default)]
struct MockInner {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates an empty mock transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    #[must_use]
    pub fn with_response(self, response: HttpResponse) -> Self {
        lock(&self.inner.responses).push_back(Ok(response));
        self
    }

    /// Queues a JSON response with the given status.
    #[must_use]
    pub fn with_json(self, code: u16, body: serde_json::Value) -> Self {
        self.with_response(HttpResponse::json(code, &body))
    }

    /// Queues a connection failure.
    #[must_use]
    pub fn with_connection_error(self, message: impl Into<String>) -> Self {
        lock(&self.inner.responses).push_back(Err(message.into()));
        self
    }

    /// Returns all requests sent so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.inner.requests).clone()
    }

    /// Returns the most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.inner.requests).last().cloned()
    }

    /// Returns the number of queued responses not yet consumed.
    #[must_use]
    pub fn pending(&self) -> usize {
        lock(&self.inner.responses).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ConnectionError> {
        request.verify()?;
        lock(&self.inner.requests).push(request);

        match lock(&self.inner.responses).pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ConnectionError::Transport { message }),
            None => Err(ConnectionError::Transport {
                message: "mock transport has no queued response".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use serde_json::json;

    fn get(url: &str) -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, url).build().unwrap()
    }

    #[tokio::test]
    async fn test_replays_responses_in_order() {
        let transport = MockTransport::new()
            .with_json(200, json!({"n": 1}))
            .with_json(404, json!({"n": 2}));

        let first = transport.send(get("https://api.test/a")).await.unwrap();
        let second = transport.send(get("https://api.test/b")).await.unwrap();

        assert_eq!(first.code, 200);
        assert_eq!(second.code, 404);
        assert_eq!(transport.pending(), 0);
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(transport.last_request().unwrap().url, "https://api.test/b");
    }

    #[tokio::test]
    async fn test_connection_error_is_reported() {
        let transport = MockTransport::new().with_connection_error("socket closed");

        let result = transport.send(get("https://api.test/a")).await;
        assert!(matches!(
            result,
            Err(ConnectionError::Transport { message }) if message == "socket closed"
        ));
    }

    #[tokio::test]
    async fn test_empty_queue_is_a_connection_error() {
        let transport = MockTransport::new();
        assert!(transport.send(get("https://api.test/a")).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let transport = MockTransport::new().with_json(200, json!({}));
        let handle = transport.clone();

        transport.send(get("https://api.test/a")).await.unwrap();
        assert_eq!(handle.requests().len(), 1);
        assert_eq!(handle.pending(), 0);
    }
}
