//! Order resource implementation.
//!
//! Orders combine line items, shipping and payment. Each order item points
//! at its SKU through an expandable `parent`, and an order embeds the first
//! page of its returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::RestResource;
//! use stripe_api::rest::resources::{Order, OrderPayParams, OrderUpdateParams};
//!
//! let order = Order::retrieve(&client, "or_123", None).await?;
//! for item in &order.items {
//!     println!("{:?} x{:?} ({:?})", item.description, item.quantity, item.parent());
//! }
//!
//! let params = OrderPayParams { source: Some("tok_visa".into()), ..Default::default() };
//! let paid = Order::pay(&client, "or_123", &params, None).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::rest::ResourceClient;
use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId, ItemKind, Page,
    PaginatedCollection, RequestOptions, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse, RestResource, Schema,
};

use super::charge::Charge;
use super::common::ShippingDetails;
use super::customer::Customer;
use super::order_return::OrderReturn;
use super::sku::Sku;

/// An order for one or more SKUs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Order {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"order"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Total amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_returned: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<i64>,

    /// The payment for this order, once paid.
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
    pub customer: Option<Expandable<Customer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_coupon_code: Option<String>,

    /// Line items in server order.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// First page of returns made against this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<Page<OrderReturn>>,

    /// Id of the chosen shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_shipping_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_methods: Option<Vec<ShippingMethod>>,

    /// `created`, `paid`, `canceled`, `fulfilled` or `returned`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_transitions: Option<StatusTransitions>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_id: Option<String>,
}

impl Order {
    expandable_accessors!(charge, charge_object, Charge);
    expandable_accessors!(customer, customer_object, Customer);

    /// Pays the order with a source or the customer's default source.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport, API or decoding failures.
    pub async fn pay(
        client: &ResourceClient,
        id: &str,
        params: &OrderPayParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let op = Self::operation(ResourceOperation::Custom("pay"), &[("id", id)])?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request(op).await
    }

    /// Returns all or part of a paid order.
    ///
    /// Without `items` the whole order is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport, API or decoding failures.
    pub async fn return_order(
        client: &ResourceClient,
        id: &str,
        params: &OrderReturnOrderParams,
        options: Option<RequestOptions>,
    ) -> Result<ResourceResponse<OrderReturn>, ResourceError> {
        let op = Self::operation(ResourceOperation::Custom("returns"), &[("id", id)])?
            .params(params)?
            .options(options.unwrap_or_default());
        client.request(op).await
    }

    /// Binds the embedded returns page to `client` for further paging.
    ///
    /// Returns `Ok(None)` when the order carries no returns list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the list has no `url`.
    pub fn returns_collection(
        &self,
        client: &ResourceClient,
    ) -> Result<Option<PaginatedCollection<OrderReturn>>, ResourceError> {
        self.returns
            .clone()
            .map(|page| client.paginate(page))
            .transpose()
    }
}

impl HasId for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Order {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "order",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::integer("amount"),
                FieldSpec::integer("amount_returned"),
                FieldSpec::string("application"),
                FieldSpec::integer("application_fee"),
                FieldSpec::expandable("charge", Charge::schema),
                FieldSpec::integer("created"),
                FieldSpec::string("currency"),
                FieldSpec::expandable("customer", Customer::schema),
                FieldSpec::string("email"),
                FieldSpec::string("external_coupon_code"),
                FieldSpec::list("items", ItemKind::Nested(OrderItem::schema)),
                FieldSpec::boolean("livemode"),
                FieldSpec::metadata("metadata"),
                FieldSpec::page("returns", OrderReturn::schema),
                FieldSpec::string("selected_shipping_method"),
                FieldSpec::nested("shipping", ShippingDetails::schema),
                FieldSpec::list("shipping_methods", ItemKind::Nested(ShippingMethod::schema)),
                FieldSpec::string("status"),
                FieldSpec::nested("status_transitions", StatusTransitions::schema),
                FieldSpec::integer("updated"),
                FieldSpec::string("upstream_id"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Order {
    const OBJECT: &'static str = "order";
}

impl RestResource for Order {
    type RetrieveParams = ();
    type ListParams = OrderListParams;
    type CreateParams = OrderCreateParams;
    type UpdateParams = OrderUpdateParams;

    const NAME: &'static str = "Order";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/orders/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/orders"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/orders"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/orders/{id}"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Custom("pay"),
            &["id"],
            "/v1/orders/{id}/pay",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Custom("returns"),
            &["id"],
            "/v1/orders/{id}/returns",
        ),
    ];
}

/// A line of an order or order return.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderItem {
    /// Always `"order_item"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The SKU for `sku` items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Expandable<Sku>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// `sku`, `tax`, `shipping` or `discount`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl OrderItem {
    expandable_accessors!(parent, parent_object, Sku);
}

impl ApiObject for OrderItem {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "order_item",
            fields: &[
                FieldSpec::string("object"),
                FieldSpec::integer("amount"),
                FieldSpec::string("currency"),
                FieldSpec::string("description"),
                FieldSpec::expandable("parent", Sku::schema),
                FieldSpec::integer("quantity"),
                FieldSpec::string("type"),
            ],
        };
        &SCHEMA
    }
}

/// A shipping option offered for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShippingMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_estimate: Option<DeliveryEstimate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiObject for ShippingMethod {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "shipping_method",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::integer("amount"),
                FieldSpec::string("currency"),
                FieldSpec::nested("delivery_estimate", DeliveryEstimate::schema),
                FieldSpec::string("description"),
            ],
        };
        &SCHEMA
    }
}

/// When a shipment is expected to arrive.
///
/// `exact` estimates carry `date`; `range` estimates carry `earliest` and
/// `latest`. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DeliveryEstimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub estimate_type: Option<String>,
}

impl ApiObject for DeliveryEstimate {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "delivery_estimate",
            fields: &[
                FieldSpec::string("date"),
                FieldSpec::string("earliest"),
                FieldSpec::string("latest"),
                FieldSpec::string("type"),
            ],
        };
        &SCHEMA
    }
}

/// Timestamps of an order's status changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StatusTransitions {
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub canceled: Option<DateTime<Utc>>,

    /// Sent by the API under the misspelled key `fulfiled`.
    #[serde(
        rename = "fulfiled",
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fulfilled: Option<DateTime<Utc>>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid: Option<DateTime<Utc>>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub returned: Option<DateTime<Utc>>,
}

impl ApiObject for StatusTransitions {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "status_transitions",
            fields: &[
                FieldSpec::integer("canceled"),
                FieldSpec::integer("fulfiled"),
                FieldSpec::integer("paid"),
                FieldSpec::integer("returned"),
            ],
        };
        &SCHEMA
    }
}

/// An item when creating an order or return.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderItemParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// SKU id for `sku` items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

/// Parameters for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemParams>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetails>,
}

/// Tracking details when marking an order fulfilled.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderShippingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// Parameters for updating an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_shipping_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<OrderShippingParams>,

    /// `created`, `paid`, `canceled`, `fulfilled` or `returned`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Parameters for paying an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderPayParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// A payment source token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Parameters for returning an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderReturnOrderParams {
    /// Items to return; all items when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemParams>>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

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
    use crate::clients::MockTransport;
    use crate::config::{ApiKey, StripeConfig};
    use crate::rest::codec;
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: &MockTransport) -> ResourceClient {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();
        ResourceClient::with_transport(config, Arc::new(transport.clone()))
    }

    #[test]
    fn test_order_items_mixed_parent_forms() {
        let order: Order = codec::decode_value(json!({
            "id": "or_1",
            "object": "order",
            "items": [
                {"object": "order_item", "type": "sku", "parent": "sku_1", "quantity": 2},
                {"object": "order_item", "type": "sku", "parent": {"id": "sku_2", "object": "sku", "price": 700}},
                {"object": "order_item", "type": "shipping", "parent": null}
            ]
        }))
        .unwrap();

        assert_eq!(order.items.len(), 3);
        assert_eq!(order.items[0].parent(), Some("sku_1"));
        assert!(order.items[0].parent_object().is_none());
        assert_eq!(order.items[1].parent(), Some("sku_2"));
        assert_eq!(order.items[1].parent_object().and_then(|s| s.price), Some(700));
        assert_eq!(order.items[2].parent(), None);
        assert_eq!(order.items[2].item_type.as_deref(), Some("shipping"));
    }

    #[test]
    fn test_status_transitions_wire_key() {
        let order: Order = codec::decode_value(json!({
            "id": "or_1",
            "status_transitions": {"paid": 1_600_000_000, "fulfiled": 1_600_000_100}
        }))
        .unwrap();

        let transitions = order.status_transitions.unwrap();
        assert_eq!(transitions.fulfilled.map(|t| t.timestamp()), Some(1_600_000_100));

        let wire = serde_json::to_value(&transitions).unwrap();
        assert_eq!(wire["fulfiled"], 1_600_000_100);
    }

    #[test]
    fn test_shipping_method_estimate() {
        let order: Order = codec::decode_value(json!({
            "id": "or_1",
            "shipping_methods": [{
                "id": "ship_free",
                "amount": 0,
                "delivery_estimate": {"type": "range", "earliest": "2024-01-02", "latest": "2024-01-05"}
            }]
        }))
        .unwrap();

        let methods = order.shipping_methods.unwrap();
        let estimate = methods[0].delivery_estimate.as_ref().unwrap();
        assert_eq!(estimate.estimate_type.as_deref(), Some("range"));
        assert_eq!(estimate.latest.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn test_update_params_nest_shipping() {
        let params = OrderUpdateParams {
            status: Some("fulfilled".to_string()),
            shipping: Some(OrderShippingParams {
                carrier: Some("UPS".to_string()),
                tracking_number: Some("1Z999".to_string()),
            }),
            ..Default::default()
        };

        let mut pairs = codec::form_encode(&codec::encode(&params).unwrap());
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("shipping[carrier]".to_string(), "UPS".to_string()),
                ("shipping[tracking_number]".to_string(), "1Z999".to_string()),
                ("status".to_string(), "fulfilled".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pay_posts_source() {
        let transport = MockTransport::new()
            .with_json(200, json!({"id": "or_1", "object": "order", "status": "paid", "charge": "ch_1"}));

        let params = OrderPayParams {
            source: Some("tok_visa".to_string()),
            ..Default::default()
        };
        let order = Order::pay(&client(&transport), "or_1", &params, None)
            .await
            .unwrap();

        assert_eq!(order.charge(), Some("ch_1"));
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "https://api.stripe.com/v1/orders/or_1/pay");
        assert_eq!(sent.body.as_deref(), Some("source=tok_visa"));
    }

    #[tokio::test]
    async fn test_return_order_decodes_order_return() {
        let transport = MockTransport::new().with_json(
            200,
            json!({"id": "orret_1", "object": "order_return", "amount": 1500, "order": "or_1"}),
        );

        let order_return =
            Order::return_order(&client(&transport), "or_1", &OrderReturnOrderParams::default(), None)
                .await
                .unwrap();

        assert_eq!(order_return.id, "orret_1");
        assert_eq!(order_return.order(), Some("or_1"));
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.stripe.com/v1/orders/or_1/returns"
        );
    }

    #[tokio::test]
    async fn test_returns_collection_fetches_next_page_from_embedded_url() {
        let order: Order = codec::decode_value(json!({
            "id": "or_1",
            "returns": {
                "object": "list",
                "data": [{"id": "orret_1", "object": "order_return"}],
                "has_more": true,
                "url": "/v1/order_returns?order=or_1"
            }
        }))
        .unwrap();
        let transport = MockTransport::new().with_json(
            200,
            json!({
                "object": "list",
                "data": [{"id": "orret_2", "object": "order_return"}],
                "has_more": false,
                "url": "/v1/order_returns"
            }),
        );
        let client = client(&transport);

        let returns = order.returns_collection(&client).unwrap().unwrap();
        assert_eq!(returns.items()[0].id, "orret_1");

        let next = returns.next_page().await.unwrap().unwrap();
        assert_eq!(next.items()[0].id, "orret_2");
        assert!(next.next_page().await.unwrap().is_none());

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_value("order"), Some("or_1"));
        assert_eq!(sent.query_value("starting_after"), Some("orret_1"));
    }
}
