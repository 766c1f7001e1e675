//! The resource request/response pipeline.
//!
//! [`ResourceClient`] turns an [`OperationDescriptor`] into an HTTP exchange
//! and decodes the result into the declared type.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpRequest, Transport};
use crate::clients::ConnectionError;
use crate::config::StripeConfig;
use crate::rest::codec;
use crate::rest::resources::Deleted;
use crate::rest::{
    ApiError, ApiObject, ApiResource, OperationDescriptor, Page, PaginatedCollection,
    ResourceError, ResourceOperation, ResourceResponse,
};

/// The decoded result of an operation, selected by the operation kind.
#[derive(Debug)]
pub enum Outcome<T> {
    /// A single resource (retrieve, create, update, custom actions).
    Resource(ResourceResponse<T>),
    /// A page of resources bound to its query (list).
    Collection(PaginatedCollection<T>),
    /// A deletion confirmation (delete).
    Deleted(ResourceResponse<Deleted>),
}

/// Executes resource operations against the API.
///
/// The client holds the configuration and a shared [`Transport`]; it keeps
/// no other state between calls. Cloning is cheap.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::{ApiKey, ResourceClient, StripeConfig};
/// use stripe_api::rest::{OperationDescriptor, ResourceOperation};
/// use stripe_api::rest::resources::Customer;
/// use stripe_api::HttpMethod;
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123")?)
///     .build()?;
/// let client = ResourceClient::new(config)?;
///
/// let op = OperationDescriptor::new(
///     ResourceOperation::Retrieve,
///     HttpMethod::Get,
///     "/v1/customers/{id}",
/// )
/// .path_param("id", "cus_123");
///
/// let customer = client.request::<Customer>(op).await?;
/// println!("{:?}", customer.email);
/// ```
#[derive(Clone)]
pub struct ResourceClient {
    transport: Arc<dyn Transport>,
    config: StripeConfig,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ResourceClient {
    /// Creates a client backed by the default [`HttpClient`] transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the HTTP client cannot be built.
    pub fn new(config: StripeConfig) -> Result<Self, ConnectionError> {
        let transport = HttpClient::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client with a custom transport.
    #[must_use]
    pub fn with_transport(config: StripeConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Executes an operation, decoding the result according to its kind.
    ///
    /// List operations produce [`Outcome::Collection`], deletes produce
    /// [`Outcome::Deleted`], everything else [`Outcome::Resource`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    pub async fn execute<T: ApiResource>(
        &self,
        op: OperationDescriptor,
    ) -> Result<Outcome<T>, ResourceError> {
        match op.kind() {
            ResourceOperation::List => self.request_collection(op).await.map(Outcome::Collection),
            ResourceOperation::Delete => self.request_deleted(op).await.map(Outcome::Deleted),
            _ => self.request(op).await.map(Outcome::Resource),
        }
    }

    /// Executes an operation whose response is a single object of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    pub async fn request<T: ApiObject>(
        &self,
        op: OperationDescriptor,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        let (value, request_id) = self.send(&op).await?;
        let data = codec::decode_value(value)?;
        Ok(ResourceResponse::new(data, request_id))
    }

    /// Executes a list operation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    pub async fn request_collection<T: ApiResource>(
        &self,
        op: OperationDescriptor,
    ) -> Result<PaginatedCollection<T>, ResourceError> {
        let (value, request_id) = self.send(&op).await?;
        let page = codec::decode_page(value)?;
        Ok(PaginatedCollection::new(page, request_id, op, self.clone()))
    }

    /// Executes a delete operation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    pub async fn request_deleted(
        &self,
        op: OperationDescriptor,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        self.request(op).await
    }

    /// Binds an embedded list (such as `Order.returns`) to this client so
    /// further pages can be fetched through its `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the page has no `url`.
    pub fn paginate<T: ApiResource>(
        &self,
        page: Page<T>,
    ) -> Result<PaginatedCollection<T>, ResourceError> {
        let url = page
            .url
            .as_deref()
            .ok_or_else(|| ResourceError::PathResolutionFailed {
                resource: T::OBJECT.to_string(),
                operation: ResourceOperation::List.to_string(),
            })?;
        let query = OperationDescriptor::from_list_url(url);
        Ok(PaginatedCollection::new(page, None, query, self.clone()))
    }

    fn build_request(&self, op: &OperationDescriptor, path: &str) -> Result<HttpRequest, ResourceError> {
        let method = op.method();
        let params = op.wire_params();
        let url = format!("{}{path}", self.config.api_base());

        let mut builder = HttpRequest::builder(method, url);

        if method.uses_query_params() {
            builder = builder.query(codec::form_encode(&params));
        } else {
            let body = match op.body_type() {
                DataType::Json => Value::Object(params).to_string(),
                DataType::Form => codec::to_form_body(&codec::form_encode(&params)),
            };
            builder = builder.body(body, op.body_type());
        }

        if let Some(key) = &op.request_options().idempotency_key {
            if method.is_mutating() {
                builder = builder.header("Idempotency-Key", key.as_ref());
            } else {
                tracing::warn!(
                    method = %method,
                    path,
                    "Ignoring idempotency key on a non-mutating request"
                );
            }
        }

        Ok(builder.build()?)
    }

    async fn send(
        &self,
        op: &OperationDescriptor,
    ) -> Result<(Value, Option<String>), ResourceError> {
        let path = op.resolved_path()?;
        let request = self.build_request(op, &path)?;

        tracing::debug!(method = %op.method(), path = %path, operation = %op.kind(), "Sending API request");

        let response = self.transport.send(request).await?;
        let request_id = response.request_id().map(ToString::to_string);

        tracing::debug!(
            status = response.code,
            request_id = request_id.as_deref().unwrap_or_default(),
            "Received API response"
        );

        if !response.is_ok() {
            let error = ApiError::from_response(response.code, &response.body, request_id.as_deref());
            tracing::warn!(
                status = error.status,
                code = error.code.as_deref().unwrap_or_default(),
                request_id = request_id.as_deref().unwrap_or_default(),
                "API request failed"
            );
            return Err(error.into());
        }

        let value = serde_json::from_str(&response.body).map_err(|e| {
            ResourceError::InvalidResponse {
                message: e.to_string(),
                request_id: request_id.clone(),
            }
        })?;

        Ok((value, request_id))
    }
}
