//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait. A resource declares its
//! parameter types and path templates; the trait supplies `retrieve`, `list`,
//! `create`, `update` and `delete`, all routed through the single
//! [`ResourceClient`] pipeline.
//!
//! # Implementing a Resource
//!
//! 1. Define the model with serde derives and implement [`ApiObject`] and
//!    [`HasId`](crate::rest::HasId)
//! 2. Implement [`ApiResource`] with the `object` discriminator
//! 3. Implement `RestResource` with parameter types and `PATHS`
//!
//! # Example
//!
//! ```rust,ignore
//! impl RestResource for Capability {
//!     type RetrieveParams = ();
//!     type ListParams = ();
//!     type CreateParams = ();
//!     type UpdateParams = CapabilityUpdateParams;
//!
//!     const NAME: &'static str = "Capability";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["account", "id"], "/v1/accounts/{account}/capabilities/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &["account"], "/v1/accounts/{account}/capabilities"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["account", "id"], "/v1/accounts/{account}/capabilities/{id}"),
//!     ];
//! }
//!
//! // Usage:
//! let capability = Capability::retrieve_with_ids(
//!     &client,
//!     &[("account", "acct_1"), ("id", "card_payments")],
//!     &(),
//!     None,
//! )
//! .await?;
//! ```

use serde::Serialize;

use crate::clients::rest::ResourceClient;
use crate::rest::collection::PaginatedCollection;
use crate::rest::errors::ResourceError;
use crate::rest::operation::{OperationDescriptor, RequestOptions};
use crate::rest::path::{get_path, ResourceOperation, ResourcePath};
use crate::rest::resources::Deleted;
use crate::rest::response::ResourceResponse;
use crate::rest::schema::ApiResource;

/// A resource that can be retrieved, listed, created, updated and deleted.
///
/// Operations a resource does not support simply have no entry in `PATHS`;
/// calling them fails with [`ResourceError::PathResolutionFailed`] before any
/// request is sent.
///
/// # Associated Types
///
/// - `RetrieveParams`: query parameters for `retrieve` (use `()` if none)
/// - `ListParams`: filters and page size for `list`
/// - `CreateParams`: body parameters for `create`
/// - `UpdateParams`: body parameters for `update`; unset fields are omitted
///   from the request, so only what the caller set is changed
#[allow(async_fn_in_trait)]
pub trait RestResource: ApiResource + Sized {
    /// Parameters for `retrieve()`.
    type RetrieveParams: Serialize + Default + Send + Sync;

    /// Parameters for `list()`.
    type ListParams: Serialize + Default + Send + Sync;

    /// Parameters for `create()`.
    type CreateParams: Serialize + Send + Sync;

    /// Parameters for `update()`.
    type UpdateParams: Serialize + Send + Sync;

    /// The resource name used in error messages (e.g. "Charge").
    const NAME: &'static str;

    /// Path templates for each supported operation.
    ///
    /// Path selection chooses the most specific template whose ids are all
    /// available.
    const PATHS: &'static [ResourcePath];

    /// Builds a descriptor for `operation` using the available path ids.
    ///
    /// Also the entry point for custom actions, e.g.
    /// `Order::operation(ResourceOperation::Custom("pay"), &[("id", "or_1")])`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no template matches.
    fn operation(
        operation: ResourceOperation,
        ids: &[(&'static str, &str)],
    ) -> Result<OperationDescriptor, ResourceError> {
        let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
        let path = get_path(Self::PATHS, operation, &available).ok_or_else(|| {
            ResourceError::PathResolutionFailed {
                resource: Self::NAME.to_string(),
                operation: operation.to_string(),
            }
        })?;

        Ok(ids
            .iter()
            .filter(|(name, _)| path.ids.contains(name))
            .fold(OperationDescriptor::from_path(path), |op, &(name, value)| {
                op.path_param(name, value)
            }))
    }

    /// Retrieves a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let customer = Customer::retrieve(&client, "cus_123", None).await?;
    /// println!("{:?}", customer.email);
    /// ```
    async fn retrieve(
        client: &ResourceClient,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::retrieve_with_ids(client, &[("id", id)], &Self::RetrieveParams::default(), options)
            .await
    }

    /// Retrieves a resource addressed by several path ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn retrieve_with_ids(
        client: &ResourceClient,
        ids: &[(&'static str, &str)],
        params: &Self::RetrieveParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let op = Self::operation(ResourceOperation::Retrieve, ids)?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request(op).await
    }

    /// Lists resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let charges = Charge::list(&client, &ChargeListParams { limit: Some(10), ..Default::default() }, None).await?;
    /// for charge in charges.items() {
    ///     println!("{} {:?}", charge.id, charge.amount);
    /// }
    /// ```
    async fn list(
        client: &ResourceClient,
        params: &Self::ListParams,
        options: Option<RequestOptions>,
    ) -> Result<PaginatedCollection<Self>, ResourceError> {
        Self::list_with_ids(client, &[], params, options).await
    }

    /// Lists resources nested under a parent (e.g. an account's capabilities).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn list_with_ids(
        client: &ResourceClient,
        ids: &[(&'static str, &str)],
        params: &Self::ListParams,
        options: Option<RequestOptions>,
    ) -> Result<PaginatedCollection<Self>, ResourceError> {
        let op = Self::operation(ResourceOperation::List, ids)?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request_collection(op).await
    }

    /// Creates a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn create(
        client: &ResourceClient,
        params: &Self::CreateParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::create_with_ids(client, &[], params, options).await
    }

    /// Creates a resource nested under a parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn create_with_ids(
        client: &ResourceClient,
        ids: &[(&'static str, &str)],
        params: &Self::CreateParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let op = Self::operation(ResourceOperation::Create, ids)?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request(op).await
    }

    /// Updates a resource. Only fields set in `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = OrderUpdateParams { status: Some("fulfilled".into()), ..Default::default() };
    /// let order = Order::update(&client, "or_123", &params, None).await?;
    /// ```
    async fn update(
        client: &ResourceClient,
        id: &str,
        params: &Self::UpdateParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::update_with_ids(client, &[("id", id)], params, options).await
    }

    /// Updates a resource addressed by several path ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn update_with_ids(
        client: &ResourceClient,
        ids: &[(&'static str, &str)],
        params: &Self::UpdateParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let op = Self::operation(ResourceOperation::Update, ids)?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request(op).await
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn delete(
        client: &ResourceClient,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        Self::delete_with_ids(client, &[("id", id)], options).await
    }

    /// Deletes a resource addressed by several path ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on path resolution, transport, API or
    /// decoding failures.
    async fn delete_with_ids(
        client: &ResourceClient,
        ids: &[(&'static str, &str)],
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        let op = Self::operation(ResourceOperation::Delete, ids)?
            .options(options.unwrap_or_default());
        client.request_deleted(op).await
    }
}
