//! Operation descriptors: one logical API call, fully described as data.
//!
//! An [`OperationDescriptor`] names the operation kind, HTTP method, path
//! template and its parameters, the encoded request parameters, and the
//! per-request options. Call sites build one and hand it to
//! [`ResourceClient`](crate::ResourceClient), which consumes it.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::{OperationDescriptor, RequestOptions, ResourceOperation};
//! use stripe_api::{HttpMethod, IdempotencyKey};
//!
//! let op = OperationDescriptor::new(
//!     ResourceOperation::Custom("pay"),
//!     HttpMethod::Post,
//!     "/v1/orders/{id}/pay",
//! )
//! .path_param("id", "or_123")
//! .param("source", "tok_visa")
//! .options(RequestOptions::new().idempotency_key(IdempotencyKey::new("pay-or_123").unwrap()));
//!
//! assert_eq!(op.resolved_path().unwrap(), "/v1/orders/or_123/pay");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{DataType, HttpMethod};
use crate::config::IdempotencyKey;
use crate::rest::codec;
use crate::rest::errors::ResourceError;
use crate::rest::path::{build_path, ResourceOperation, ResourcePath};

/// Per-request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Idempotency key sent on mutating requests.
    pub idempotency_key: Option<IdempotencyKey>,
    /// Fields to expand in the response, e.g. `customer` or `data.items`.
    pub expand: Vec<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idempotency key.
    #[must_use]
    pub fn idempotency_key(mut self, key: IdempotencyKey) -> Self {
        self.idempotency_key = Some(key);
        self
    }

    /// Adds a field to expand.
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }
}

/// A single logical API call.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    kind: ResourceOperation,
    method: HttpMethod,
    template: Cow<'static, str>,
    path_params: Vec<(&'static str, String)>,
    params: Map<String, Value>,
    options: RequestOptions,
    data_type: DataType,
}

impl OperationDescriptor {
    /// Creates a descriptor with no parameters.
    #[must_use]
    pub fn new(
        kind: ResourceOperation,
        method: HttpMethod,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            method,
            template: template.into(),
            path_params: Vec::new(),
            params: Map::new(),
            options: RequestOptions::default(),
            data_type: DataType::default(),
        }
    }

    /// Creates a descriptor from a resource path.
    #[must_use]
    pub fn from_path(path: &ResourcePath) -> Self {
        Self::new(path.operation, path.http_method, path.template)
    }

    /// Creates a list descriptor from an embedded list's `url`.
    ///
    /// A query string in the url is split off into parameters.
    #[must_use]
    pub fn from_list_url(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let mut op = Self::new(ResourceOperation::List, HttpMethod::Get, path.to_string());

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| {
                urlencoding::decode(s).map_or_else(|_| s.to_string(), |d| d.into_owned())
            };
            op.params
                .insert(decode(key), Value::String(decode(value)));
        }

        op
    }

    /// Binds a path placeholder.
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Merges an encoded parameter object into the request parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if `params` does not serialize to an
    /// object.
    pub fn params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, ResourceError> {
        self.params.extend(codec::encode(params)?);
        Ok(self)
    }

    /// Sets a single request parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets the request options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the body encoding for POST requests.
    #[must_use]
    pub const fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceOperation {
        self.kind
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the request parameters, without expansions.
    #[must_use]
    pub const fn request_params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Returns the request options.
    #[must_use]
    pub const fn request_options(&self) -> &RequestOptions {
        &self.options
    }

    /// Returns the body encoding.
    #[must_use]
    pub const fn body_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the path with every placeholder substituted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if a placeholder has
    /// no bound value.
    pub fn resolved_path(&self) -> Result<String, ResourceError> {
        let ids: HashMap<&str, &str> = self
            .path_params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let path = build_path(&self.template, &ids);

        if path.contains('{') {
            return Err(ResourceError::PathResolutionFailed {
                resource: self.template.to_string(),
                operation: self.kind.to_string(),
            });
        }
        Ok(path)
    }

    /// Returns the parameters to send, with `expand` merged in.
    #[must_use]
    pub fn wire_params(&self) -> Map<String, Value> {
        let mut params = self.params.clone();
        if !self.options.expand.is_empty() {
            let expand = self
                .options
                .expand
                .iter()
                .cloned()
                .map(Value::String)
                .collect();
            params.insert("expand".to_string(), Value::Array(expand));
        }
        params
    }

    /// Returns a copy with one parameter replaced, used for page cursors.
    #[must_use]
    pub(crate) fn with_param(&self, key: &str, value: &str) -> Self {
        let mut op = self.clone();
        op.params.remove("starting_after");
        op.params.remove("page");
        op.params
            .insert(key.to_string(), Value::String(value.to_string()));
        op
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct ListParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        customer: Option<String>,
    }

    #[test]
    fn test_from_path_copies_metadata() {
        const PATH: ResourcePath = ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "/v1/customers/{id}",
        );
        let op = OperationDescriptor::from_path(&PATH).path_param("id", "cus_1");

        assert_eq!(op.kind(), ResourceOperation::Delete);
        assert_eq!(op.method(), HttpMethod::Delete);
        assert_eq!(op.resolved_path().unwrap(), "/v1/customers/cus_1");
    }

    #[test]
    fn test_resolved_path_fails_on_unbound_placeholder() {
        let op = OperationDescriptor::new(
            ResourceOperation::Retrieve,
            HttpMethod::Get,
            "/v1/accounts/{account}/capabilities/{id}",
        )
        .path_param("id", "transfers");

        assert!(matches!(
            op.resolved_path(),
            Err(ResourceError::PathResolutionFailed { operation, .. }) if operation == "retrieve"
        ));
    }

    #[test]
    fn test_params_merge_and_skip_unset_fields() {
        let op = OperationDescriptor::new(ResourceOperation::List, HttpMethod::Get, "/v1/charges")
            .params(&ListParams {
                limit: Some(3),
                customer: None,
            })
            .unwrap();

        assert_eq!(Value::Object(op.request_params().clone()), json!({"limit": 3}));
    }

    #[test]
    fn test_wire_params_include_expansions() {
        let op = OperationDescriptor::new(ResourceOperation::Retrieve, HttpMethod::Get, "/v1/charges/ch_1")
            .options(RequestOptions::new().expand("customer").expand("invoice"));

        assert_eq!(
            Value::Object(op.wire_params()),
            json!({"expand": ["customer", "invoice"]})
        );
        assert!(op.request_params().is_empty());
    }

    #[test]
    fn test_from_list_url_splits_query() {
        let op = OperationDescriptor::from_list_url("/v1/order_returns?order=or_1&limit=10");

        assert_eq!(op.kind(), ResourceOperation::List);
        assert_eq!(op.method(), HttpMethod::Get);
        assert_eq!(op.template(), "/v1/order_returns");
        assert_eq!(
            Value::Object(op.request_params().clone()),
            json!({"order": "or_1", "limit": "10"})
        );
    }

    #[test]
    fn test_with_param_replaces_cursor() {
        let op = OperationDescriptor::new(ResourceOperation::List, HttpMethod::Get, "/v1/charges")
            .param("limit", 2)
            .with_param("starting_after", "ch_2")
            .with_param("starting_after", "ch_4");

        assert_eq!(
            Value::Object(op.request_params().clone()),
            json!({"limit": 2, "starting_after": "ch_4"})
        );
    }
}
