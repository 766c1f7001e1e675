//! Account resource implementation.
//!
//! Connected accounts. Capabilities are nested under an account; see
//! [`Capability`](super::Capability).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    ApiObject, ApiResource, FieldSpec, HasId, ResourceOperation, ResourcePath, RestResource,
    Schema,
};

use super::common::ListParams;

/// A connected account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Account {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"account"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// `individual`, `company`, `non_profit` or `government_entity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    /// Whether the account can create live charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges_enabled: Option<bool>,

    /// The account's country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    /// Three-letter ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,

    /// Whether account details have been submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_submitted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// Whether payouts to the account's bank are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payouts_enabled: Option<bool>,

    /// `standard`, `express` or `custom`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl HasId for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Account {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "account",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::string("business_type"),
                FieldSpec::boolean("charges_enabled"),
                FieldSpec::string("country"),
                FieldSpec::integer("created"),
                FieldSpec::string("default_currency"),
                FieldSpec::boolean("details_submitted"),
                FieldSpec::string("email"),
                FieldSpec::metadata("metadata"),
                FieldSpec::boolean("payouts_enabled"),
                FieldSpec::string("type"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Account {
    const OBJECT: &'static str = "account";
}

impl RestResource for Account {
    type RetrieveParams = ();
    type ListParams = ListParams;
    type CreateParams = AccountCreateParams;
    type UpdateParams = AccountUpdateParams;

    const NAME: &'static str = "Account";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/accounts/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/accounts"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/accounts"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/accounts/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "/v1/accounts/{id}"),
    ];
}

/// Parameters for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountCreateParams {
    /// `standard`, `express` or `custom`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Parameters for updating an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}
