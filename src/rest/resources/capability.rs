//! Capability resource implementation.
//!
//! Capabilities only exist under an account, so every operation needs both
//! the `account` and capability `id` path parameters:
//!
//! ```rust,ignore
//! use stripe_api::rest::RestResource;
//! use stripe_api::rest::resources::{Capability, CapabilityUpdateParams};
//!
//! let capability = Capability::retrieve_with_ids(
//!     &client,
//!     &[("account", "acct_123"), ("id", "card_payments")],
//!     &(),
//!     None,
//! ).await?;
//!
//! let params = CapabilityUpdateParams { requested: Some(true) };
//! Capability::update_with_ids(&client, &[("account", "acct_123"), ("id", "transfers")], &params, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId, ItemKind,
    ResourceOperation, ResourcePath, RestResource, ScalarKind, Schema,
};

use super::account::Account;
use super::common::ListParams;

/// A capability of a connected account, such as `card_payments`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Capability {
    /// The capability name, e.g. `card_payments`.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"capability"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// The account owning the capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Expandable<Account>>,

    /// Whether the capability was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<bool>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<CapabilityRequirements>,

    /// `active`, `inactive`, `pending`, `unrequested` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Capability {
    expandable_accessors!(account, account_object, Account);
}

/// Information still needed to enable a capability.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CapabilityRequirements {
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_deadline: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_due: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<RequirementError>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventually_due: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_due: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_verification: Option<Vec<String>>,
}

impl ApiObject for CapabilityRequirements {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "requirements",
            fields: &[
                FieldSpec::integer("current_deadline"),
                FieldSpec::list("currently_due", ItemKind::Scalar(ScalarKind::String)),
                FieldSpec::string("disabled_reason"),
                FieldSpec::list("errors", ItemKind::Nested(RequirementError::schema)),
                FieldSpec::list("eventually_due", ItemKind::Scalar(ScalarKind::String)),
                FieldSpec::list("past_due", ItemKind::Scalar(ScalarKind::String)),
                FieldSpec::list("pending_verification", ItemKind::Scalar(ScalarKind::String)),
            ],
        };
        &SCHEMA
    }
}

/// A verification failure for one requirement.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RequirementError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// The requirement that failed, e.g. `individual.id_number`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

impl ApiObject for RequirementError {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "requirement_error",
            fields: &[
                FieldSpec::string("code"),
                FieldSpec::string("reason"),
                FieldSpec::string("requirement"),
            ],
        };
        &SCHEMA
    }
}

impl HasId for Capability {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Capability {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "capability",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::expandable("account", Account::schema),
                FieldSpec::boolean("requested"),
                FieldSpec::integer("requested_at"),
                FieldSpec::nested("requirements", CapabilityRequirements::schema),
                FieldSpec::string("status"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Capability {
    const OBJECT: &'static str = "capability";
}

impl RestResource for Capability {
    type RetrieveParams = ();
    type ListParams = ListParams;
    type CreateParams = ();
    type UpdateParams = CapabilityUpdateParams;

    const NAME: &'static str = "Capability";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Retrieve,
            &["account", "id"],
            "/v1/accounts/{account}/capabilities/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["account"],
            "/v1/accounts/{account}/capabilities",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Update,
            &["account", "id"],
            "/v1/accounts/{account}/capabilities/{id}",
        ),
    ];
}

/// Parameters for updating a capability.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CapabilityUpdateParams {
    /// Request or unrequest the capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockTransport;
    use crate::clients::rest::ResourceClient;
    use crate::config::{ApiKey, StripeConfig};
    use crate::rest::codec;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_requirements_decode() {
        let capability: Capability = codec::decode_value(json!({
            "id": "card_payments",
            "object": "capability",
            "account": "acct_1",
            "status": "pending",
            "requirements": {
                "currently_due": ["individual.id_number"],
                "errors": [{"code": "invalid_value_other", "requirement": "individual.id_number"}]
            }
        }))
        .unwrap();

        assert_eq!(capability.account(), Some("acct_1"));
        let requirements = capability.requirements.unwrap();
        assert_eq!(
            requirements.currently_due,
            Some(vec!["individual.id_number".to_string()])
        );
        assert_eq!(
            requirements.errors.unwrap()[0].code.as_deref(),
            Some("invalid_value_other")
        );
    }

    #[test]
    fn test_requirement_list_items_are_checked() {
        let error = codec::decode_value::<Capability>(json!({
            "id": "card_payments",
            "requirements": {"past_due": ["a", 2]}
        }))
        .unwrap_err();
        assert_eq!(error.field, "requirements.past_due[1]");
    }

    #[tokio::test]
    async fn test_list_under_account() {
        let transport = MockTransport::new().with_json(
            200,
            json!({
                "object": "list",
                "data": [{"id": "card_payments", "object": "capability"}],
                "has_more": false,
                "url": "/v1/accounts/acct_1/capabilities"
            }),
        );
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();
        let client = ResourceClient::with_transport(config, Arc::new(transport.clone()));

        let capabilities = Capability::list_with_ids(
            &client,
            &[("account", "acct_1")],
            &ListParams::default(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(capabilities.items()[0].id, "card_payments");
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.stripe.com/v1/accounts/acct_1/capabilities"
        );
    }
}
