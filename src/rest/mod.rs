//! REST resource infrastructure for the Stripe API.
//!
//! This module provides the mechanisms every resource model depends on:
//!
//! - **[`Expandable<T>`]**: a field that is either a bare identifier or the
//!   expanded object it names
//! - **[`shape`]**: dispatch on JSON kind for fields whose wire form changed
//!   across API versions
//! - **[`Schema`] and [`codec`]**: declared field kinds per type, checked
//!   before decoding so mismatches report the exact field path
//! - **[`OperationDescriptor`]**: one logical API call described as data
//! - **[`PaginatedCollection<T>`]**: a page of results that knows how to fetch
//!   the next one
//! - **[`RestResource`] trait**: default CRUD operations for a resource
//! - **[`ResourceError`]**: error types for resource operations
//!
//! Individual resources (Charge, Order, Event, ...) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{RestResource, RequestOptions};
//! use stripe_api::rest::resources::{Charge, ChargeListParams, Order, OrderUpdateParams};
//!
//! // Retrieve with an expanded reference
//! let charge = Charge::retrieve(&client, "ch_123", Some(RequestOptions::new().expand("customer"))).await?;
//! println!("customer: {:?}", charge.customer());
//! if let Some(customer) = charge.customer_object() {
//!     println!("email: {:?}", customer.email);
//! }
//!
//! // Partial update: only `status` is sent
//! let params = OrderUpdateParams { status: Some("fulfilled".into()), ..Default::default() };
//! Order::update(&client, "or_123", &params, None).await?;
//!
//! // Paginate
//! let charges = Charge::list(&client, &ChargeListParams::default(), None).await?;
//! let mut next = charges.next_page().await?;
//! ```

pub mod codec;
mod collection;
mod errors;
mod expandable;
mod operation;
mod path;
mod resource;
mod response;
mod schema;
pub mod shape;

pub mod resources;

// Public exports
pub use collection::{Cursor, Page, PaginatedCollection};
pub use errors::{ApiError, ApiErrorKind, MalformedField, ResourceError};
pub use expandable::{Expandable, HasId};
pub(crate) use expandable::expandable_accessors;
pub use operation::{OperationDescriptor, RequestOptions};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;
pub use schema::{
    ApiObject, ApiResource, DiscriminatorFn, FieldKind, FieldSpec, ItemKind, ScalarKind, Schema,
    SchemaFn,
};
pub use shape::{FromIdentifier, JsonKind, Shape};
