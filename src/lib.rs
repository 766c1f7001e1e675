//! # Stripe API Rust SDK
//!
//! A Rust SDK for the Stripe API, providing type-safe configuration, typed
//! resource models, and an async request pipeline with cursor pagination.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for credentials and request values
//! - Expandable references ([`rest::Expandable`]) that hold either an id or
//!   the expanded object
//! - Shape dispatch for fields whose wire form drifted across API versions
//! - A generic resource pipeline ([`ResourceClient`], [`rest::RestResource`])
//! - Lazy auto-pagination over list endpoints
//! - Webhook signature verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_api::{ApiKey, ApiVersion, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::V2020_08_27)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use stripe_api::{ResourceClient, StripeConfig, ApiKey};
//! use stripe_api::rest::{RequestOptions, RestResource};
//! use stripe_api::rest::resources::{Charge, ChargeListParams};
//!
//! let client = ResourceClient::new(config)?;
//!
//! // Retrieve with the customer expanded
//! let charge = Charge::retrieve(&client, "ch_123", Some(RequestOptions::new().expand("customer"))).await?;
//! println!("{:?} paid by {:?}", charge.amount, charge.customer());
//!
//! // Every charge, fetched page by page as the stream is consumed
//! let params = ChargeListParams { limit: Some(100), ..Default::default() };
//! let all: Vec<Charge> = Charge::list(&client, &params, None)
//!     .await?
//!     .auto_paging_stream()
//!     .try_collect()
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use stripe_api::rest::{ApiErrorKind, ResourceError};
//!
//! match Charge::create(&client, &params, None).await {
//!     Ok(charge) => println!("created {}", charge.id),
//!     Err(ResourceError::Api(e)) if e.kind() == ApiErrorKind::Card => {
//!         println!("declined: {:?}", e.decline_code);
//!     }
//!     Err(e) => println!("request {:?} failed: {e}", e.request_id()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable values**: Decoded resources and pages are snapshots

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{
    ApiBase, ApiKey, ApiVersion, IdempotencyKey, StripeConfig, StripeConfigBuilder,
    WebhookSecret,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ConnectionError, DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, MockTransport, ResourceClient, Transport,
};
