//! SKU resource implementation.
//!
//! SKUs are the purchasable variants of a product; order items reference
//! them through their expandable `parent`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    ApiObject, ApiResource, FieldSpec, HasId, ResourceOperation, ResourcePath, RestResource,
    Schema,
};

/// A stock keeping unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Sku {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"sku"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Attribute values, e.g. `{"size": "M"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// Unit price in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,

    /// The product this SKU belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<DateTime<Utc>>,
}

/// Stock information of a SKU.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Inventory {
    /// Units in stock, for `finite` inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// `finite`, `bucket` or `infinite`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub inventory_type: Option<String>,

    /// `in_stock`, `limited` or `out_of_stock`, for `bucket` inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ApiObject for Inventory {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "inventory",
            fields: &[
                FieldSpec::integer("quantity"),
                FieldSpec::string("type"),
                FieldSpec::string("value"),
            ],
        };
        &SCHEMA
    }
}

impl HasId for Sku {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Sku {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "sku",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::boolean("active"),
                FieldSpec::metadata("attributes"),
                FieldSpec::integer("created"),
                FieldSpec::string("currency"),
                FieldSpec::string("image"),
                FieldSpec::nested("inventory", Inventory::schema),
                FieldSpec::boolean("livemode"),
                FieldSpec::metadata("metadata"),
                FieldSpec::integer("price"),
                FieldSpec::string("product"),
                FieldSpec::integer("updated"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for Sku {
    const OBJECT: &'static str = "sku";
}

impl RestResource for Sku {
    type RetrieveParams = ();
    type ListParams = SkuListParams;
    type CreateParams = SkuParams;
    type UpdateParams = SkuParams;

    const NAME: &'static str = "Sku";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Retrieve, &["id"], "/v1/skus/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/v1/skus"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/skus"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "/v1/skus/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "/v1/skus/{id}"),
    ];
}

/// Parameters for creating or updating a SKU.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SkuParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

/// Parameters for listing SKUs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SkuListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

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
    use serde_json::json;

    #[test]
    fn test_sku_inventory_decodes() {
        let sku: Sku = codec::decode_value(json!({
            "id": "sku_1",
            "object": "sku",
            "price": 1500,
            "attributes": {"size": "M"},
            "inventory": {"type": "finite", "quantity": 50}
        }))
        .unwrap();

        let inventory = sku.inventory.unwrap();
        assert_eq!(inventory.inventory_type.as_deref(), Some("finite"));
        assert_eq!(inventory.quantity, Some(50));
        assert_eq!(sku.attributes.unwrap()["size"], "M");
    }

    #[test]
    fn test_sku_params_bracket_inventory() {
        let params = SkuParams {
            inventory: Some(Inventory {
                inventory_type: Some("bucket".to_string()),
                value: Some("limited".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut pairs = codec::form_encode(&codec::encode(&params).unwrap());
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("inventory[type]".to_string(), "bucket".to_string()),
                ("inventory[value]".to_string(), "limited".to_string()),
            ]
        );
    }
}
