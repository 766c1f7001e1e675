//! Resource client for the Stripe API.
//!
//! This module provides [`ResourceClient`], the single pipeline every
//! resource operation goes through:
//!
//! 1. the [`OperationDescriptor`](crate::rest::OperationDescriptor) path is
//!    resolved against the configured API base
//! 2. parameters are encoded (query string for GET/DELETE, form or JSON body
//!    for POST)
//! 3. the [`Transport`](crate::clients::Transport) performs the exchange
//! 4. the body is decoded into the declared type, or into an
//!    [`ApiError`](crate::rest::ApiError) for non-2xx responses
//!
//! The client never retries and never generates idempotency keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stripe_api::{ApiKey, ResourceClient, StripeConfig};
//! use stripe_api::clients::MockTransport;
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//!
//! // Real HTTP
//! let client = ResourceClient::new(config.clone())?;
//!
//! // Scripted responses for tests
//! let mock = MockTransport::new();
//! let client = ResourceClient::with_transport(config, Arc::new(mock));
//! ```

mod client;

pub use client::{Outcome, ResourceClient};
