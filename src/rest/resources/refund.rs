//! Refund resource implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId,
    ResourceOperation, ResourcePath, RestResource, Schema,
};

use super::charge::Charge;

/// A refund of a previously created charge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Refund {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"refund"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// The refunded charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<Expandable<Charge>>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// `duplicate`, `fraudulent` or `requested_by_customer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// `pending`, `succeeded`, `failed` or `canceled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Refund {
    expandable_accessors!(charge, charge_object, Charge);
}

impl HasId for Refund {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Refund {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "refund",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::integer("amount"),
                FieldSpec::expandable("charge", Charge::schema),
                FieldSpec::integer("created"),
                FieldSpec::string("currency"),
                FieldSpec::metadata("metadata"),
                FieldSpec::string("reason"),
                FieldSpec::string("status"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Refund {
    const OBJECT: &'static str = "refund";
}

impl RestResource for Refund {
    type RetrieveParams = ();
    type ListParams = RefundListParams;
    type CreateParams = RefundCreateParams;
    type UpdateParams = RefundUpdateParams;

    const NAME: &'static str = "Refund";

    /// Refunds cannot be deleted.
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/refunds/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/refunds"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/refunds"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/refunds/{id}"),
    ];
}

/// Parameters for creating a refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefundCreateParams {
    /// The charge to refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,

    /// Amount to refund; defaults to the whole remaining charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Parameters for updating a refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefundUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Parameters for listing refunds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefundListParams {
    /// Only refunds of this charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}
