//! Customer resource implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    ApiObject, ApiResource, FieldSpec, HasId, ResourceOperation, ResourcePath, RestResource,
    Schema,
};

use super::common::{Address, ShippingDetails};

/// A customer.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::codec;
/// use stripe_api::rest::resources::Customer;
/// use serde_json::json;
///
/// let customer: Customer = codec::decode_value(json!({
///     "id": "cus_1",
///     "object": "customer",
///     "balance": -500,
///     "metadata": {"tier": "gold"}
/// }))
/// .unwrap();
///
/// assert_eq!(customer.balance, Some(-500));
/// assert_eq!(customer.metadata.unwrap()["tier"], "gold");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Customer {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"customer"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Balance in the smallest currency unit. Negative is a credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Whether the latest charge or invoice failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,
}

impl HasId for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Customer {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "customer",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::nested("address", Address::schema),
                FieldSpec::integer("balance"),
                FieldSpec::integer("created"),
                FieldSpec::string("currency"),
                FieldSpec::boolean("delinquent"),
                FieldSpec::string("description"),
                FieldSpec::string("email"),
                FieldSpec::boolean("livemode"),
                FieldSpec::metadata("metadata"),
                FieldSpec::string("name"),
                FieldSpec::string("phone"),
                FieldSpec::nested("shipping", ShippingDetails::schema),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Customer {
    const OBJECT: &'static str = "customer";
}

impl RestResource for Customer {
    type RetrieveParams = ();
    type ListParams = CustomerListParams;
    type CreateParams = CustomerParams;
    type UpdateParams = CustomerParams;

    const NAME: &'static str = "Customer";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/customers/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/customers"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/customers"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/customers/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "/v1/customers/{id}"),
    ];
}

/// Parameters for creating or updating a customer.
///
/// Only fields that are set are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// A payment source token to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,
}

/// Parameters for listing customers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    /// Case-sensitive filter on the email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}
