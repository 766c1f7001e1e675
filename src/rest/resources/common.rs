//! Types shared across resources.
//!
//! These are owned nested objects (addresses, shipping details, billing
//! periods), the deletion confirmation returned by every delete endpoint, and
//! the cursor parameters accepted by every list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::codec::null_as_default;
use crate::rest::{ApiObject, FieldSpec, HasId, Schema};

/// A postal address.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::resources::Address;
///
/// let address = Address {
///     line1: Some("1 Rue de Rivoli".to_string()),
///     city: Some("Paris".to_string()),
///     country: Some("FR".to_string()),
///     ..Default::default()
/// };
/// assert!(address.state.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    /// City, district, suburb, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Address line 1 (street, PO box, or company name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Address line 2 (apartment, suite, unit, or building).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// ZIP or postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// State, county, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ApiObject for Address {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "address",
            fields: &[
                FieldSpec::string("city"),
                FieldSpec::string("country"),
                FieldSpec::string("line1"),
                FieldSpec::string("line2"),
                FieldSpec::string("postal_code"),
                FieldSpec::string("state"),
            ],
        };
        &SCHEMA
    }
}

/// Shipping information for a charge, customer, or order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShippingDetails {
    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// The delivery service that shipped the goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recipient phone, including extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl ApiObject for ShippingDetails {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "shipping",
            fields: &[
                FieldSpec::nested("address", Address::schema),
                FieldSpec::string("carrier"),
                FieldSpec::string("name"),
                FieldSpec::string("phone"),
                FieldSpec::string("tracking_number"),
            ],
        };
        &SCHEMA
    }
}

/// A billing period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Period {
    /// Start of the period.
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DateTime<Utc>>,
    /// End of the period.
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,
}

impl ApiObject for Period {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "period",
            fields: &[FieldSpec::integer("start"), FieldSpec::integer("end")],
        };
        &SCHEMA
    }
}

/// Confirmation returned by delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Deleted {
    /// Identifier of the deleted object.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// The deleted object's kind, e.g. `"customer"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Always `true` for a successful deletion.
    #[serde(deserialize_with = "null_as_default")]
    pub deleted: bool,
}

impl HasId for Deleted {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiObject for Deleted {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "deleted",
            fields: &[
                FieldSpec::string("id"),
                FieldSpec::string("object"),
                FieldSpec::boolean("deleted"),
            ],
        };
        &SCHEMA
    }
}

/// Cursor parameters accepted by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size, between 1 and 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return items after this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Return items before this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}
