//! Order return resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId, ItemKind,
    ResourceOperation, ResourcePath, RestResource, Schema,
};

use super::order::{Order, OrderItem};
use super::refund::Refund;

/// Items returned from a paid order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderReturn {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"order_return"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Amount refunded for the returned items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    /// The order the items came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Expandable<Order>>,

    /// The refund issued for this return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<Expandable<Refund>>,
}

impl OrderReturn {
    expandable_accessors!(order, order_object, Order);
    expandable_accessors!(refund, refund_object, Refund);
}

impl HasId for OrderReturn {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for OrderReturn {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "order_return",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::integer("amount"),
                FieldSpec::integer("created"),
                FieldSpec::string("currency"),
                FieldSpec::list("items", ItemKind::Nested(OrderItem::schema)),
                FieldSpec::boolean("livemode"),
                FieldSpec::expandable("order", Order::schema),
                FieldSpec::expandable("refund", Refund::schema),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for OrderReturn {
    const OBJECT: &'static str = "order_return";
}

impl RestResource for OrderReturn {
    type RetrieveParams = ();
    type ListParams = OrderReturnListParams;
    type CreateParams = ();
    type UpdateParams = ();

    const NAME: &'static str = "OrderReturn";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Retrieve,
            &["id"],
            "/v1/order_returns/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/order_returns"),
    ];
}

/// Parameters for listing order returns.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderReturnListParams {
    /// Only returns of this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}
