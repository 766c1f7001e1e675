//! Path building infrastructure for resources.
//!
//! Resources can be reachable through several templates. A `Capability`, for
//! example, lives under its account:
//!
//! - `/v1/accounts/{account}/capabilities/{id}` (retrieve, update)
//! - `/v1/accounts/{account}/capabilities` (list)
//!
//! The resolver selects the most specific template whose ids are all
//! available. Substituted values are percent-encoded.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use stripe_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Retrieve,
//!         &["account", "id"],
//!         "/v1/accounts/{account}/capabilities/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Retrieve, &["account", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("account", "acct_1");
//! ids.insert("id", "card_payments");
//! assert_eq!(
//!     build_path(path.template, &ids),
//!     "/v1/accounts/acct_1/capabilities/card_payments"
//! );
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Logical operations on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Retrieve a single resource (GET /v1/resources/{id}).
    Retrieve,
    /// List resources (GET /v1/resources).
    List,
    /// Create a resource (POST /v1/resources).
    Create,
    /// Update a resource (POST /v1/resources/{id}).
    Update,
    /// Delete a resource (DELETE /v1/resources/{id}).
    Delete,
    /// A named custom action, e.g. `pay` (POST /v1/orders/{id}/pay).
    Custom(&'static str),
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Retrieve | Self::List => HttpMethod::Get,
            Self::Create | Self::Update | Self::Custom(_) => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Retrieve => "retrieve",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Custom(name) => *name,
        }
    }
}

impl Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path template for one resource operation.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{ResourcePath, ResourceOperation};
/// use stripe_api::HttpMethod;
///
/// const ORDER_PAY: ResourcePath = ResourcePath::new(
///     HttpMethod::Post,
///     ResourceOperation::Custom("pay"),
///     &["id"],
///     "/v1/orders/{id}/pay",
/// );
/// assert_eq!(ORDER_PAY.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["account", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for an operation.
///
/// Paths are filtered by operation and by availability of their ids; among
/// the survivors the one requiring the most ids wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Interpolates `{name}` placeholders, percent-encoding each value.
///
/// Placeholders without a value are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(&value.to_string()));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
