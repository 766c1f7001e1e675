//! Webhook signature verification and event construction.
//!
//! - [`construct_event`]: verify a payload and decode it as an
//!   [`Event`](crate::rest::resources::Event)
//! - [`verify_header`]: verify only
//! - [`compute_signature`]: sign a payload, for tests and tooling
//! - [`WebhookError`]: error types for webhook operations
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::webhooks::{construct_event, DEFAULT_TOLERANCE, SIGNATURE_HEADER};
//!
//! let header = request.headers()[SIGNATURE_HEADER].to_str()?;
//! match construct_event(&body, header, &secret, DEFAULT_TOLERANCE) {
//!     Ok(event) => println!("received {:?}", event.event_type),
//!     Err(e) => eprintln!("rejected webhook: {e}"),
//! }
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, construct_event, verify_header, DEFAULT_TOLERANCE, SIGNATURE_HEADER,
};
