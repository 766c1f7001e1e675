//! A resource of any kind, selected by its `object` discriminator.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::rest::codec;
use crate::rest::errors::MalformedField;
use crate::rest::shape::JsonKind;
use crate::rest::{ApiObject, ApiResource, HasId, Schema};

use super::account::Account;
use super::capability::Capability;
use super::charge::Charge;
use super::customer::Customer;
use super::discount::Discount;
use super::invoice_line_item::InvoiceLineItem;
use super::order::Order;
use super::order_return::OrderReturn;
use super::refund::Refund;
use super::sku::Sku;
use super::tax_rate::TaxRate;

/// Any catalog resource.
///
/// Payloads whose `object` names a kind this crate does not model are kept
/// as [`AnyResource::Unknown`] with their raw JSON.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum AnyResource {
    Account(Account),
    Capability(Capability),
    Charge(Charge),
    Customer(Customer),
    Discount(Discount),
    InvoiceLineItem(InvoiceLineItem),
    Order(Order),
    OrderReturn(OrderReturn),
    Refund(Refund),
    Sku(Sku),
    TaxRate(TaxRate),
    /// A kind without a typed model.
    Unknown(Value),
}

/// Returns the schema registered for an `object` discriminator.
#[must_use]
pub fn schema_for(object: &str) -> Option<&'static Schema> {
    let schema = match object {
        Account::OBJECT => Account::schema(),
        Capability::OBJECT => Capability::schema(),
        Charge::OBJECT => Charge::schema(),
        Customer::OBJECT => Customer::schema(),
        Discount::OBJECT => Discount::schema(),
        InvoiceLineItem::OBJECT => InvoiceLineItem::schema(),
        Order::OBJECT => Order::schema(),
        OrderReturn::OBJECT => OrderReturn::schema(),
        Refund::OBJECT => Refund::schema(),
        Sku::OBJECT => Sku::schema(),
        TaxRate::OBJECT => TaxRate::schema(),
        _ => return None,
    };
    Some(schema)
}

impl AnyResource {
    /// Decodes `value` into the variant its `object` field names.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedField`] if `value` is not an object, or if it
    /// names a known kind but does not match that kind's schema.
    pub fn from_value(value: Value) -> Result<Self, MalformedField> {
        let object = match &value {
            Value::Object(map) => map.get("object").and_then(Value::as_str).map(str::to_string),
            other => return Err(MalformedField::new("object", "object", JsonKind::of(other))),
        };

        Ok(match object.as_deref() {
            Some(Account::OBJECT) => Self::Account(codec::decode_value(value)?),
            Some(Capability::OBJECT) => Self::Capability(codec::decode_value(value)?),
            Some(Charge::OBJECT) => Self::Charge(codec::decode_value(value)?),
            Some(Customer::OBJECT) => Self::Customer(codec::decode_value(value)?),
            Some(Discount::OBJECT) => Self::Discount(codec::decode_value(value)?),
            Some(InvoiceLineItem::OBJECT) => Self::InvoiceLineItem(codec::decode_value(value)?),
            Some(Order::OBJECT) => Self::Order(codec::decode_value(value)?),
            Some(OrderReturn::OBJECT) => Self::OrderReturn(codec::decode_value(value)?),
            Some(Refund::OBJECT) => Self::Refund(codec::decode_value(value)?),
            Some(Sku::OBJECT) => Self::Sku(codec::decode_value(value)?),
            Some(TaxRate::OBJECT) => Self::TaxRate(codec::decode_value(value)?),
            _ => Self::Unknown(value),
        })
    }

    /// Returns the `object` discriminator.
    #[must_use]
    pub fn object(&self) -> Option<&str> {
        Some(match self {
            Self::Account(_) => Account::OBJECT,
            Self::Capability(_) => Capability::OBJECT,
            Self::Charge(_) => Charge::OBJECT,
            Self::Customer(_) => Customer::OBJECT,
            Self::Discount(_) => Discount::OBJECT,
            Self::InvoiceLineItem(_) => InvoiceLineItem::OBJECT,
            Self::Order(_) => Order::OBJECT,
            Self::OrderReturn(_) => OrderReturn::OBJECT,
            Self::Refund(_) => Refund::OBJECT,
            Self::Sku(_) => Sku::OBJECT,
            Self::TaxRate(_) => TaxRate::OBJECT,
            Self::Unknown(value) => return value.get("object").and_then(Value::as_str),
        })
    }

    /// Returns the resource identifier, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            Self::Account(r) => r.id(),
            Self::Capability(r) => r.id(),
            Self::Charge(r) => r.id(),
            Self::Customer(r) => r.id(),
            Self::Discount(r) => r.id(),
            Self::InvoiceLineItem(r) => r.id(),
            Self::Order(r) => r.id(),
            Self::OrderReturn(r) => r.id(),
            Self::Refund(r) => r.id(),
            Self::Sku(r) => r.id(),
            Self::TaxRate(r) => r.id(),
            Self::Unknown(value) => return value.get("id").and_then(Value::as_str),
        };
        Some(id)
    }
}

impl Serialize for AnyResource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Account(r) => r.serialize(serializer),
            Self::Capability(r) => r.serialize(serializer),
            Self::Charge(r) => r.serialize(serializer),
            Self::Customer(r) => r.serialize(serializer),
            Self::Discount(r) => r.serialize(serializer),
            Self::InvoiceLineItem(r) => r.serialize(serializer),
            Self::Order(r) => r.serialize(serializer),
            Self::OrderReturn(r) => r.serialize(serializer),
            Self::Refund(r) => r.serialize(serializer),
            Self::Sku(r) => r.serialize(serializer),
            Self::TaxRate(r) => r.serialize(serializer),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AnyResource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_for_known_and_unknown() {
        assert_eq!(schema_for("charge").map(|s| s.name), Some("charge"));
        assert_eq!(schema_for("line_item").map(|s| s.name), Some("line_item"));
        assert!(schema_for("product").is_none());
    }

    #[test]
    fn test_from_value_selects_variant() {
        let resource =
            AnyResource::from_value(json!({"id": "acct_1", "object": "account"})).unwrap();
        assert!(matches!(resource, AnyResource::Account(_)));
        assert_eq!(resource.object(), Some("account"));
        assert_eq!(resource.id(), Some("acct_1"));
    }

    #[test]
    fn test_from_value_reports_field_of_known_kind() {
        let error =
            AnyResource::from_value(json!({"id": "sku_1", "object": "sku", "price": "1"}))
                .unwrap_err();
        assert_eq!(error.field, "price");
    }

    #[test]
    fn test_unknown_kind_keeps_json() {
        let raw = json!({"id": "prod_1", "object": "product"});
        let resource = AnyResource::from_value(raw.clone()).unwrap();
        assert_eq!(resource.object(), Some("product"));
        assert_eq!(resource.id(), Some("prod_1"));
        assert_eq!(serde_json::to_value(&resource).unwrap(), raw);
    }

    #[test]
    fn test_missing_discriminator_is_unknown() {
        let resource = AnyResource::from_value(json!({"id": "x"})).unwrap();
        assert!(matches!(resource, AnyResource::Unknown(_)));
        assert_eq!(resource.object(), None);
    }

    #[test]
    fn test_non_object_is_malformed() {
        let error = AnyResource::from_value(json!("ch_1")).unwrap_err();
        assert_eq!(error.found, JsonKind::String);
    }
}
