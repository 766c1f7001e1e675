//! HTTP response types for the Stripe API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by every
//! [`Transport`](crate::clients::Transport). The body is kept as raw text;
//! decoding is the resource layer's job.

use std::collections::HashMap;

/// A raw response from the Stripe API.
///
/// Header names are stored lowercased; a header may repeat.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use stripe_api::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("request-id".to_string(), vec!["req_123".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"id":"ch_1"}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req_123"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (lowercased keys).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, normalizing header names to lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(key, values)| (key.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Creates a response with a JSON body and no headers.
    #[must_use]
    pub fn json(code: u16, body: &serde_json::Value) -> Self {
        Self::new(code, HashMap::new(), body.to_string())
    }

    /// Adds a header, returning the response.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns `true` if the response has a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the server-assigned request id (`Request-Id` header).
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
    }
}
