//! HTTP client types for Stripe API communication.
//!
//! This module provides the transport layer of the SDK and the resource
//! client built on top of it.
//!
//! # Overview
//!
//! - [`Transport`]: The narrow "send one request, get one response" interface
//! - [`HttpClient`]: The production transport (reqwest, rustls)
//! - [`MockTransport`]: A scripted transport for tests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::ResourceClient`]: Executes resource operations over a transport
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, StripeConfig};
//! use stripe_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "https://api.stripe.com/v1/balance")
//!     .build()?;
//! let response = client.send(request).await?;
//! println!("{} {:?}", response.code, response.request_id());
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod mock;
pub mod rest;
mod transport;

pub use errors::{ConnectionError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use mock::MockTransport;
pub use transport::Transport;

// Re-export the resource client at the clients module level
pub use rest::{Outcome, ResourceClient};
