//! Event resource implementation.
//!
//! Events record changes to other resources. Two of their fields are
//! polymorphic:
//!
//! - `request` drifted from a bare request id (`"req_123"`) in older API
//!   versions to an object (`{"id": "req_123", "idempotency_key": "..."}`).
//!   Both decode into [`EventRequest`].
//! - `data.object` is whichever resource the event is about. Its `object`
//!   discriminator selects the variant of [`AnyResource`].
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::codec;
//! use stripe_api::rest::resources::{AnyResource, Event};
//! use serde_json::json;
//!
//! let event: Event = codec::decode_value(json!({
//!     "id": "evt_1",
//!     "object": "event",
//!     "type": "charge.succeeded",
//!     "request": "req_123",
//!     "data": {"object": {"id": "ch_1", "object": "charge", "amount": 1000}}
//! })).unwrap();
//!
//! assert_eq!(event.request.as_ref().and_then(|r| r.id.as_deref()), Some("req_123"));
//! assert!(matches!(event.data.object, Some(AnyResource::Charge(_))));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::shape::FromIdentifier;
use crate::rest::{
    ApiObject, ApiResource, FieldSpec, HasId, ResourceOperation, ResourcePath, RestResource,
    Schema,
};

use super::any_resource::{schema_for, AnyResource};

/// A change to a resource, as delivered by `/v1/events` and webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Event {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"event"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// The connected account that originated the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// API version used to render `data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "null_as_default")]
    pub data: EventData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    /// Webhooks not yet delivered successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_webhooks: Option<i64>,

    /// The API request that caused the event, if any.
    #[serde(
        deserialize_with = "crate::rest::shape::drifted",
        skip_serializing_if = "Option::is_none"
    )]
    pub request: Option<EventRequest>,

    /// e.g. `charge.succeeded`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

/// The payload of an event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EventData {
    /// The resource after the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<AnyResource>,

    /// Previous values of changed fields, for `*.updated` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<Value>,
}

impl ApiObject for EventData {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "event_data",
            fields: &[
                FieldSpec::discriminated("object", schema_for),
                FieldSpec::any("previous_attributes"),
            ],
        };
        &SCHEMA
    }
}

/// The request that triggered an event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EventRequest {
    /// The request id, `None` for automatic events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The idempotency key sent with the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl FromIdentifier for EventRequest {
    fn from_identifier(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

impl ApiObject for EventRequest {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "request",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("idempotency_key"),
            ],
        };
        &SCHEMA
    }
}

impl HasId for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Event {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "event",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::string("account"),
                FieldSpec::string("api_version"),
                FieldSpec::integer("created"),
                FieldSpec::nested("data", EventData::schema),
                FieldSpec::boolean("livemode"),
                FieldSpec::integer("pending_webhooks"),
                FieldSpec::shape_drifted("request", EventRequest::schema),
                FieldSpec::string("type"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Event {
    const OBJECT: &'static str = "event";
}

impl RestResource for Event {
    type RetrieveParams = ();
    type ListParams = EventListParams;
    type CreateParams = ();
    type UpdateParams = ();

    const NAME: &'static str = "Event";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/events/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/events"),
    ];
}

/// Parameters for listing events.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EventListParams {
    /// A single event type, e.g. `charge.succeeded`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Several event types; takes precedence over `type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::codec;
    use crate::rest::shape::JsonKind;
    use serde_json::json;

    #[test]
    fn test_request_as_identifier() {
        let event: Event =
            codec::decode_value(json!({"id": "evt_1", "request": "req_123"})).unwrap();
        let request = event.request.unwrap();
        assert_eq!(request.id.as_deref(), Some("req_123"));
        assert!(request.idempotency_key.is_none());
    }

    #[test]
    fn test_request_as_object() {
        let event: Event = codec::decode_value(json!({
            "id": "evt_1",
            "request": {"id": "req_123", "idempotency_key": "k1"}
        }))
        .unwrap();
        assert_eq!(
            event.request,
            Some(EventRequest {
                id: Some("req_123".to_string()),
                idempotency_key: Some("k1".to_string()),
            })
        );
    }

    #[test]
    fn test_request_null_or_missing() {
        let missing: Event = codec::decode_value(json!({"id": "evt_1"})).unwrap();
        assert!(missing.request.is_none());

        let null: Event = codec::decode_value(json!({"id": "evt_1", "request": null})).unwrap();
        assert!(null.request.is_none());
    }

    #[test]
    fn test_request_number_is_malformed() {
        let error = codec::decode_value::<Event>(json!({"id": "evt_1", "request": 42})).unwrap_err();
        assert_eq!(error.field, "request");
        assert_eq!(error.found, JsonKind::Number);
    }

    #[test]
    fn test_data_object_dispatches_on_discriminator() {
        let event: Event = codec::decode_value(json!({
            "id": "evt_1",
            "type": "customer.updated",
            "data": {
                "object": {"id": "cus_1", "object": "customer", "email": "new@example.com"},
                "previous_attributes": {"email": "old@example.com"}
            }
        }))
        .unwrap();

        match event.data.object {
            Some(AnyResource::Customer(customer)) => {
                assert_eq!(customer.email.as_deref(), Some("new@example.com"));
            }
            other => panic!("expected customer, got {other:?}"),
        }
        assert_eq!(
            event.data.previous_attributes.unwrap()["email"],
            "old@example.com"
        );
    }

    #[test]
    fn test_data_object_is_checked_against_selected_schema() {
        let error = codec::decode_value::<Event>(json!({
            "id": "evt_1",
            "data": {"object": {"id": "ch_1", "object": "charge", "amount": "ten"}}
        }))
        .unwrap_err();
        assert_eq!(error.field, "data.object.amount");
    }

    #[test]
    fn test_unknown_data_object_is_preserved() {
        let raw = json!({"id": "prod_1", "object": "product", "name": "Shirt"});
        let event: Event = codec::decode_value(json!({
            "id": "evt_1",
            "data": {"object": raw.clone()}
        }))
        .unwrap();
        assert_eq!(event.data.object, Some(AnyResource::Unknown(raw)));
    }

    #[test]
    fn test_event_round_trips() {
        let wire = json!({
            "id": "evt_1",
            "object": "event",
            "created": 1_600_000_000,
            "data": {"object": {"id": "re_1", "object": "refund", "amount": 100, "charge": "ch_1"}},
            "request": {"id": "req_1", "idempotency_key": "k1"},
            "type": "charge.refunded"
        });
        let event: Event = codec::decode_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&event).unwrap(), wire);
    }
}
