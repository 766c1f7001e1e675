//! Tax rate resource implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    ApiObject, ApiResource, FieldSpec, HasId, ResourceOperation, ResourcePath, RestResource,
    Schema,
};

/// A tax rate applied to invoices and line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TaxRate {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"tax_rate"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Inactive rates cannot be applied to new objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Shown on invoices, e.g. "VAT".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Whether the rate is included in the amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// Rate as a percentage, e.g. `19.6`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl HasId for TaxRate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for TaxRate {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "tax_rate",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::boolean("active"),
                FieldSpec::string("country"),
                FieldSpec::integer("created"),
                FieldSpec::string("description"),
                FieldSpec::string("display_name"),
                FieldSpec::boolean("inclusive"),
                FieldSpec::string("jurisdiction"),
                FieldSpec::boolean("livemode"),
                FieldSpec::metadata("metadata"),
                FieldSpec::float("percentage"),
                FieldSpec::string("state"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for TaxRate {
    const OBJECT: &'static str = "tax_rate";
}

impl RestResource for TaxRate {
    type RetrieveParams = ();
    type ListParams = TaxRateListParams;
    type CreateParams = TaxRateParams;
    type UpdateParams = TaxRateParams;

    const NAME: &'static str = "TaxRate";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/tax_rates/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/tax_rates"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/tax_rates"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/tax_rates/{id}"),
    ];
}

/// Parameters for creating or updating a tax rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxRateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Parameters for listing tax rates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaxRateListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}
