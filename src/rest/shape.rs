//! Shape dispatch for fields whose wire form drifted across API versions.
//!
//! Some fields were rendered as a bare identifier string in older API
//! versions and as a structured object in newer ones; `Event.request` is the
//! canonical case:
//!
//! ```json
//! "request": "req_123"
//! "request": {"id": "req_123", "idempotency_key": "k1"}
//! ```
//!
//! The decode path is chosen from the runtime JSON kind of the value alone.
//! No version field is consulted.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::shape;
//! use stripe_api::rest::resources::EventRequest;
//! use serde_json::json;
//!
//! let old: Option<EventRequest> = shape::decode("request", &json!("req_123")).unwrap();
//! assert_eq!(old.unwrap().id.as_deref(), Some("req_123"));
//!
//! let new: Option<EventRequest> =
//!     shape::decode("request", &json!({"id": "req_123", "idempotency_key": "k1"})).unwrap();
//! assert_eq!(new.unwrap().idempotency_key.as_deref(), Some("k1"));
//!
//! assert!(shape::decode::<EventRequest>("request", &json!(42)).is_err());
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::rest::codec;
use crate::rest::errors::MalformedField;
use crate::rest::schema::ApiObject;

/// The kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Any number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl JsonKind {
    /// Returns the kind of `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// The decode path selected for a shape-drifted value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// `null`: the field is absent.
    Absent,
    /// A bare identifier string.
    Identifier(&'a str),
    /// A structured object.
    Object(&'a Map<String, Value>),
}

/// Types that can be synthesized from a bare identifier.
///
/// All fields other than the identifier take their default values.
pub trait FromIdentifier: Sized {
    /// Builds a value holding only `id`.
    fn from_identifier(id: &str) -> Self;
}

/// Selects the decode path for `raw`.
///
/// # Errors
///
/// Returns [`MalformedField`] naming `field` if `raw` is neither `null`, a
/// string, nor an object.
pub fn dispatch<'a>(field: &str, raw: &'a Value) -> Result<Shape<'a>, MalformedField> {
    match raw {
        Value::Null => Ok(Shape::Absent),
        Value::String(id) => Ok(Shape::Identifier(id)),
        Value::Object(map) => Ok(Shape::Object(map)),
        other => Err(MalformedField::new(
            field,
            "string or object",
            JsonKind::of(other),
        )),
    }
}

/// Decodes a shape-drifted value.
///
/// # Errors
///
/// Returns [`MalformedField`] for unsupported kinds or if the object form
/// does not match `T`'s schema.
pub fn decode<T>(field: &str, raw: &Value) -> Result<Option<T>, MalformedField>
where
    T: ApiObject + FromIdentifier,
{
    match dispatch(field, raw)? {
        Shape::Absent => Ok(None),
        Shape::Identifier(id) => Ok(Some(T::from_identifier(id))),
        Shape::Object(_) => codec::decode_value_at(field, raw.clone()).map(Some),
    }
}

/// Serde adapter for shape-drifted fields.
///
/// Use together with `default` so a missing key is also absent:
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "shape::drifted")]
/// pub request: Option<EventRequest>,
/// ```
///
/// # Errors
///
/// Fails with the [`MalformedField`] message if the value cannot be decoded.
pub fn drifted<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ApiObject + FromIdentifier,
{
    let raw = Value::deserialize(deserializer)?;
    decode(T::schema().name, &raw).map_err(de::Error::custom)
}

/// Serde adapter for lists whose elements are shape-drifted.
///
/// Each element is dispatched on its own JSON kind, so one list may mix
/// identifiers and objects. `null` or a missing key decodes to an empty list;
/// a `null` element is an error.
///
/// # Errors
///
/// Fails with the [`MalformedField`] message of the first bad element.
pub fn drifted_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ApiObject + FromIdentifier,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.iter()
        .enumerate()
        .map(|(index, element)| {
            let field = format!("{}[{index}]", T::schema().name);
            decode(&field, element)?
                .ok_or_else(|| MalformedField::new(field, "string or object", JsonKind::Null))
        })
        .collect::<Result<_, _>>()
        .map_err(de::Error::custom)
}
