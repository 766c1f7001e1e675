//! Invoice line item resource implementation.
//!
//! Line items are only listed under their invoice:
//!
//! ```rust,ignore
//! let lines = InvoiceLineItem::list_with_ids(
//!     &client,
//!     &[("invoice", "in_123")],
//!     &ListParams::default(),
//!     Some(RequestOptions::new().expand("data.discounts")),
//! ).await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::codec::null_as_default;
use crate::rest::{
    expandable_accessors, ApiObject, ApiResource, Expandable, FieldSpec, HasId, ItemKind,
    ResourceOperation, ResourcePath, RestResource, Schema,
};

use super::common::{ListParams, Period};
use super::discount::Discount;
use super::tax_rate::TaxRate;

/// A line of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InvoiceLineItem {
    /// Unique identifier.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Always `"line_item"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Amount discounted by each discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amounts: Option<Vec<DiscountAmount>>,

    /// Whether discounts apply to this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discountable: Option<bool>,

    /// Discounts applied to this line, as ids unless expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<Expandable<Discount>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_item: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// The billing period covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// The plan, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Value>,

    /// The price, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_item: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amounts: Option<Vec<TaxAmount>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rates: Option<Vec<TaxRate>>,

    /// `invoiceitem` or `subscription`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
}

impl InvoiceLineItem {
    /// Returns the ids of the applied discounts, in order.
    #[must_use]
    pub fn discount_ids(&self) -> Vec<&str> {
        self.discounts
            .iter()
            .flatten()
            .map(Expandable::id)
            .collect()
    }

    /// Returns the expanded discounts, skipping those left as ids.
    #[must_use]
    pub fn discount_objects(&self) -> Vec<&Discount> {
        self.discounts
            .iter()
            .flatten()
            .filter_map(Expandable::expanded_value)
            .collect()
    }
}

/// The amount one discount took off a line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DiscountAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Expandable<Discount>>,
}

impl DiscountAmount {
    expandable_accessors!(discount, discount_object, Discount);
}

impl ApiObject for DiscountAmount {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "discount_amount",
            fields: &[
                FieldSpec::integer("amount"),
                FieldSpec::expandable("discount", Discount::schema),
            ],
        };
        &SCHEMA
    }
}

/// The tax charged on a line for one tax rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TaxAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Expandable<TaxRate>>,
}

impl TaxAmount {
    expandable_accessors!(tax_rate, tax_rate_object, TaxRate);
}

impl ApiObject for TaxAmount {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "tax_amount",
            fields: &[
                FieldSpec::integer("amount"),
                FieldSpec::boolean("inclusive"),
                FieldSpec::expandable("tax_rate", TaxRate::schema),
            ],
        };
        &SCHEMA
    }
}

impl HasId for InvoiceLineItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for InvoiceLineItem {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "line_item",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::integer("amount"),
                FieldSpec::string("currency"),
                FieldSpec::string("description"),
                FieldSpec::list("discount_amounts", ItemKind::Nested(DiscountAmount::schema)),
                FieldSpec::boolean("discountable"),
                FieldSpec::list("discounts", ItemKind::Expandable(Discount::schema)),
                FieldSpec::string("invoice_item"),
                FieldSpec::boolean("livemode"),
                FieldSpec::metadata("metadata"),
                FieldSpec::nested("period", Period::schema),
                FieldSpec::any("plan"),
                FieldSpec::any("price"),
                FieldSpec::boolean("proration"),
                FieldSpec::integer("quantity"),
                FieldSpec::string("subscription"),
                FieldSpec::string("subscription_item"),
                FieldSpec::list("tax_amounts", ItemKind::Nested(TaxAmount::schema)),
                FieldSpec::list("tax_rates", ItemKind::Nested(TaxRate::schema)),
                FieldSpec::string("type"),
            ],
        };
        &SCHEMA
    }
}

impl ApiResource for InvoiceLineItem {
    const OBJECT: &'static str = "line_item";
}

impl RestResource for InvoiceLineItem {
    type RetrieveParams = ();
    type ListParams = ListParams;
    type CreateParams = ();
    type UpdateParams = ();

    const NAME: &'static str = "InvoiceLineItem";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::List,
        &["invoice"],
        "/v1/invoices/{invoice}/lines",
    )];
}
