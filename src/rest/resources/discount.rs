//! Discount object.
//!
//! A discount is the application of a coupon to a customer, invoice, or
//! subscription. It has no endpoints of its own; it appears expanded inside
//! invoice line items and as the `data.object` of discount events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId, Schema,
};

use super::customer::Customer;

/// A discount applied from a coupon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Discount {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"discount"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// The applied coupon, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,

    /// Whether the discount was removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// When the discount ends, if it has a duration.
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_item: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl Discount {
    expandable_accessors!(customer, customer_object, Customer);
}

impl HasId for Discount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Discount {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "discount",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::any("coupon"),
                FieldSpec::expandable("customer", Customer::schema),
                FieldSpec::boolean("deleted"),
                FieldSpec::integer("end"),
                FieldSpec::string("invoice"),
                FieldSpec::string("invoice_item"),
                FieldSpec::string("promotion_code"),
                FieldSpec::integer("start"),
                FieldSpec::string("subscription"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Discount {
    const OBJECT: &'static str = "discount";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::codec;
    use serde_json::json;

    #[test]
    fn test_discount_keeps_coupon_json() {
        let discount: Discount = codec::decode_value(json!({
            "id": "di_1",
            "object": "discount",
            "coupon": {"id": "SUMMER", "percent_off": 25.0},
            "customer": "cus_1",
            "start": 1_600_000_000
        }))
        .unwrap();

        assert_eq!(discount.customer(), Some("cus_1"));
        assert_eq!(discount.coupon.unwrap()["id"], "SUMMER");
        assert!(discount.end.is_none());
    }
}
