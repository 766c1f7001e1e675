//! Charge resource implementation.
//!
//! A charge embeds the first page of its refunds:
//!
//! ```json
//! "refunds": {"object": "list", "data": [...], "has_more": true, "url": "/v1/charges/ch_1/refunds"}
//! ```
//!
//! Use [`ResourceClient::paginate`](crate::ResourceClient::paginate) on
//! [`Charge::refunds`] to walk the remaining pages.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{RestResource, RequestOptions};
//! use stripe_api::rest::resources::{Charge, ChargeCaptureParams};
//!
//! let charge = Charge::retrieve(&client, "ch_123", Some(RequestOptions::new().expand("customer"))).await?;
//! if let Some(customer) = charge.customer_object() {
//!     println!("charged {:?}", customer.email);
//! }
//!
//! // Capture an authorized charge
//! let captured = Charge::capture(&client, "ch_123", &ChargeCaptureParams::default(), None).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::rest::ResourceClient;
use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId, Page,
    RequestOptions, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
    RestResource, Schema,
};

use super::common::ShippingDetails;
use super::customer::Customer;
use super::order::Order;
use super::refund::Refund;

/// A charge against a card or other payment source.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Charge {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"charge"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_captured: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<i64>,

    /// Whether an authorized charge was captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<bool>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The charged customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// The order this charge paid for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Expandable<Order>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,

    /// Whether the charge was fully refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded: Option<bool>,

    /// First page of refunds applied to this charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Page<Refund>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,

    /// `succeeded`, `pending` or `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Charge {
    expandable_accessors!(customer, customer_object, Customer);
    expandable_accessors!(order, order_object, Order);

    /// Captures the payment of an uncaptured charge.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport, API or decoding failures.
    pub async fn capture(
        client: &ResourceClient,
        id: &str,
        params: &ChargeCaptureParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let op = Self::operation(ResourceOperation::Custom("capture"), &[("id", id)])?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request(op).await
    }
}

impl HasId for Charge {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Charge {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "charge",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::integer("amount"),
                FieldSpec::integer("amount_captured"),
                FieldSpec::integer("amount_refunded"),
                FieldSpec::boolean("captured"),
                FieldSpec::integer("created"),
                FieldSpec::string("currency"),
                FieldSpec::expandable("customer", Customer::schema),
                FieldSpec::string("description"),
                FieldSpec::string("failure_code"),
                FieldSpec::string("failure_message"),
                FieldSpec::boolean("livemode"),
                FieldSpec::metadata("metadata"),
                FieldSpec::expandable("order", Order::schema),
                FieldSpec::boolean("paid"),
                FieldSpec::boolean("refunded"),
                FieldSpec::page("refunds", Refund::schema),
                FieldSpec::nested("shipping", ShippingDetails::schema),
                FieldSpec::string("status"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Charge {
    const OBJECT: &'static str = "charge";
}

impl RestResource for Charge {
    type RetrieveParams = ();
    type ListParams = ChargeListParams;
    type CreateParams = ChargeCreateParams;
    type UpdateParams = ChargeUpdateParams;

    const NAME: &'static str = "Charge";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/charges/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/charges"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/charges"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/charges/{id}"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Custom("capture"),
            &["id"],
            "/v1/charges/{id}/capture",
        ),
    ];
}

/// Parameters for creating a charge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChargeCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// A payment source token, e.g. `tok_visa`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Set to `false` to only authorize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,
}

/// Parameters for updating a charge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChargeUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,
}

/// Parameters for capturing a charge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChargeCaptureParams {
    /// Amount to capture; defaults to the full authorized amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
}

/// Parameters for listing charges.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChargeListParams {
    /// Only charges of this customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}
