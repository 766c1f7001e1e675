//! Response wrapper for single-resource operations.
//!
//! [`ResourceResponse<T>`] pairs a decoded value with the request id the
//! server assigned to the exchange. It implements `Deref<Target = T>`, so the
//! wrapper can be used like the inner value:
//!
//! ```rust,ignore
//! let customer = Customer::retrieve(&client, "cus_123", None).await?;
//!
//! // Field access via Deref
//! println!("{:?}", customer.email);
//!
//! // Metadata
//! println!("request: {:?}", customer.request_id());
//!
//! // Take ownership of the resource
//! let customer: Customer = customer.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

/// A decoded resource plus response metadata.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec!["a", "b"], Some("req_123".to_string()));
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.request_id(), Some("req_123"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse<T> {
    data: T,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new response.
    #[must_use]
    pub const fn new(data: T, request_id: Option<String>) -> Self {
        Self { data, request_id }
    }

    /// Consumes the response, returning the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner value.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner value.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the `Request-Id` header of the response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner value, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
};
