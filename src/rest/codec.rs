//! Conversion between typed values and wire JSON.
//!
//! Decoding is two-phase: the payload is first checked against the target
//! type's [`Schema`], then materialized with serde. The check phase reports
//! the exact path of the first mismatching field; unknown fields are never
//! inspected, and missing or `null` fields are treated as absent.
//!
//! Encoding serializes a parameter object and drops every `null`, so only
//! the fields a caller actually set reach the wire.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::codec;
//! use stripe_api::rest::resources::Customer;
//! use serde_json::json;
//!
//! let customer: Customer = codec::decode_value(json!({
//!     "id": "cus_1",
//!     "object": "customer",
//!     "email": "jenny@example.com",
//!     "some_future_field": {"ignored": true}
//! }))
//! .unwrap();
//! assert_eq!(customer.email.as_deref(), Some("jenny@example.com"));
//!
//! let error = codec::decode_value::<Customer>(json!({"id": "cus_1", "balance": "12"}))
//!     .unwrap_err();
//! assert_eq!(error.field, "balance");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::rest::collection::Page;
use crate::rest::errors::{MalformedField, ResourceError};
use crate::rest::schema::{ApiObject, FieldKind, Schema};
use crate::rest::shape::{self, JsonKind, Shape};

/// Decodes a JSON value as `T`.
///
/// # Errors
///
/// Returns [`MalformedField`] if the value is not an object or any declared
/// field has an unexpected JSON kind.
pub fn decode_value<T: ApiObject>(value: Value) -> Result<T, MalformedField> {
    decode_value_at("", value)
}

/// Decodes a JSON value as `T`, prefixing error paths with `path`.
pub(crate) fn decode_value_at<T: ApiObject>(path: &str, value: Value) -> Result<T, MalformedField> {
    let schema = T::schema();
    let label = if path.is_empty() { schema.name } else { path };

    match &value {
        Value::Object(map) => check_object(schema, map, path)?,
        other => return Err(MalformedField::new(label, "object", JsonKind::of(other))),
    }

    materialize(label, value)
}

/// Decodes a JSON document as `T`.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidResponse`] if `body` is not JSON and
/// [`ResourceError::MalformedField`] if it does not match `T`'s schema.
pub fn decode_str<T: ApiObject>(body: &str) -> Result<T, ResourceError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ResourceError::InvalidResponse {
            message: e.to_string(),
            request_id: None,
        })?;
    Ok(decode_value(value)?)
}

/// Decodes a list object whose items are `T`.
///
/// # Errors
///
/// Returns [`MalformedField`] if the list envelope or any item does not match.
pub fn decode_page<T: ApiObject>(value: Value) -> Result<Page<T>, MalformedField> {
    match &value {
        Value::Object(map) => check_page(T::schema(), map, "")?,
        other => return Err(MalformedField::new("list", "object", JsonKind::of(other))),
    }

    materialize("list", value)
}

fn materialize<T: serde::de::DeserializeOwned>(label: &str, value: Value) -> Result<T, MalformedField> {
    let found = JsonKind::of(&value);
    serde_json::from_value(value).map_err(|e| MalformedField::new(label, e.to_string(), found))
}

/// Serde adapter treating `null` like a missing key for non-optional fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn check_object(
    schema: &Schema,
    object: &Map<String, Value>,
    prefix: &str,
) -> Result<(), MalformedField> {
    for field in schema.fields {
        match object.get(field.name) {
            None | Some(Value::Null) => {}
            Some(value) => check_value(&field.kind, value, &join(prefix, field.name))?,
        }
    }
    Ok(())
}

fn expect_object<'a>(
    kind: &FieldKind,
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, MalformedField> {
    value
        .as_object()
        .ok_or_else(|| MalformedField::new(path, kind.expected(), JsonKind::of(value)))
}

// The identifier of an expanded object must be readable from the object.
fn check_expanded_id(map: &Map<String, Value>, path: &str) -> Result<(), MalformedField> {
    match map.get("id") {
        Some(Value::String(_)) => Ok(()),
        Some(other) => Err(MalformedField::new(join(path, "id"), "string", JsonKind::of(other))),
        None => Err(MalformedField::new(join(path, "id"), "string", JsonKind::Null)),
    }
}

fn check_value(kind: &FieldKind, value: &Value, path: &str) -> Result<(), MalformedField> {
    match kind {
        FieldKind::Scalar(scalar) => {
            if scalar.accepts(value) {
                Ok(())
            } else {
                Err(MalformedField::new(path, scalar.name(), JsonKind::of(value)))
            }
        }
        FieldKind::Nested(schema) => check_object(schema(), expect_object(kind, value, path)?, path),
        FieldKind::Expandable(schema) => match value {
            Value::String(_) => Ok(()),
            Value::Object(map) => {
                check_expanded_id(map, path)?;
                check_object(schema(), map, path)
            }
            other => Err(MalformedField::new(path, kind.expected(), JsonKind::of(other))),
        },
        FieldKind::ShapeDrifted(schema) => match shape::dispatch(path, value)? {
            Shape::Absent | Shape::Identifier(_) => Ok(()),
            Shape::Object(map) => check_object(schema(), map, path),
        },
        FieldKind::Discriminated(lookup) => {
            let map = expect_object(kind, value, path)?;
            match map.get("object").and_then(Value::as_str).and_then(lookup) {
                Some(schema) => check_object(schema, map, path),
                None => Ok(()),
            }
        }
        FieldKind::List(item) => {
            let items = value
                .as_array()
                .ok_or_else(|| MalformedField::new(path, "array", JsonKind::of(value)))?;
            let item_kind = FieldKind::from(*item);
            for (index, element) in items.iter().enumerate() {
                let element_path = format!("{path}[{index}]");
                if element.is_null() {
                    return Err(MalformedField::new(
                        element_path,
                        item_kind.expected(),
                        JsonKind::Null,
                    ));
                }
                check_value(&item_kind, element, &element_path)?;
            }
            Ok(())
        }
        FieldKind::Map(scalar) => {
            let map = expect_object(kind, value, path)?;
            for (key, entry) in map {
                if !scalar.accepts(entry) {
                    return Err(MalformedField::new(
                        format!("{path}.{key}"),
                        scalar.name(),
                        JsonKind::of(entry),
                    ));
                }
            }
            Ok(())
        }
        FieldKind::Page(schema) => check_page(schema(), expect_object(kind, value, path)?, path),
        FieldKind::Any => Ok(()),
    }
}

fn check_page(
    item_schema: &Schema,
    object: &Map<String, Value>,
    prefix: &str,
) -> Result<(), MalformedField> {
    match object.get("has_more") {
        None | Some(Value::Null | Value::Bool(_)) => {}
        Some(other) => {
            return Err(MalformedField::new(
                join(prefix, "has_more"),
                "boolean",
                JsonKind::of(other),
            ))
        }
    }

    for key in ["url", "next_page"] {
        match object.get(key) {
            None | Some(Value::Null | Value::String(_)) => {}
            Some(other) => {
                return Err(MalformedField::new(
                    join(prefix, key),
                    "string",
                    JsonKind::of(other),
                ))
            }
        }
    }

    let data_path = join(prefix, "data");
    match object.get("data") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                let path = format!("{data_path}[{index}]");
                let map = item
                    .as_object()
                    .ok_or_else(|| MalformedField::new(&path, "object", JsonKind::of(item)))?;
                check_object(item_schema, map, &path)?;
            }
            Ok(())
        }
        Some(other) => Err(MalformedField::new(data_path, "array", JsonKind::of(other))),
    }
}

/// Serializes a parameter object into a wire map, dropping every `null`.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if serialization fails or the
/// parameters do not serialize to an object.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::codec;
/// use stripe_api::rest::resources::OrderUpdateParams;
/// use serde_json::json;
///
/// let params = OrderUpdateParams {
///     status: Some("paid".to_string()),
///     ..Default::default()
/// };
///
/// let encoded = codec::encode(&params).unwrap();
/// assert_eq!(serde_json::Value::Object(encoded), json!({"status": "paid"}));
/// ```
pub fn encode<P: Serialize + ?Sized>(params: &P) -> Result<Map<String, Value>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::Encode {
        message: e.to_string(),
    })?;

    match strip_nulls(value) {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map),
        other => Err(ResourceError::Encode {
            message: format!("parameters must serialize to an object, got {}", JsonKind::of(&other)),
        }),
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}

/// Flattens a wire map into bracketed form pairs.
///
/// Nested objects become `parent[child]`, lists become `list[0]`. An empty
/// object or list is sent as an empty string, which the API treats as
/// "unset".
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::codec;
/// use serde_json::json;
///
/// let map = json!({
///     "shipping": {"address": {"city": "Paris"}},
///     "expand": ["customer"],
/// });
/// let pairs = codec::form_encode(map.as_object().unwrap());
///
/// assert!(pairs.contains(&("shipping[address][city]".to_string(), "Paris".to_string())));
/// assert!(pairs.contains(&("expand[0]".to_string(), "customer".to_string())));
/// ```
#[must_use]
pub fn form_encode(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in map {
        flatten(key, value, &mut pairs);
    }
    pairs
}

fn flatten(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((prefix.to_string(), n.to_string())),
        Value::String(s) => pairs.push((prefix.to_string(), s.clone())),
        Value::Array(items) if items.is_empty() => pairs.push((prefix.to_string(), String::new())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) if map.is_empty() => pairs.push((prefix.to_string(), String::new())),
        Value::Object(map) => {
            for (key, item) in map {
                flatten(&format!("{prefix}[{key}]"), item, pairs);
            }
        }
    }
}

/// Percent-encodes form pairs into an `application/x-www-form-urlencoded` body.
#[must_use]
pub fn to_form_body(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{
        schema_for, AnyResource, Capability, Charge, Customer, EventRequest, Order,
        OrderUpdateParams,
    };
    use crate::rest::{FieldSpec, ItemKind};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct RequestLog {
        #[serde(deserialize_with = "crate::rest::shape::drifted_list")]
        requests: Vec<EventRequest>,
        objects: Vec<AnyResource>,
    }

    impl ApiObject for RequestLog {
        fn schema() -> &'static Schema {
            static SCHEMA: Schema = Schema {
                name: "request_log",
                fields: &[
                    FieldSpec::list("requests", ItemKind::ShapeDrifted(EventRequest::schema)),
                    FieldSpec::list("objects", ItemKind::Discriminated(schema_for)),
                ],
            };
            &SCHEMA
        }
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let customer: Customer = decode_value(json!({
            "id": "cus_1",
            "object": "customer",
            "brand_new_field": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(customer.id, "cus_1");
    }

    #[test]
    fn test_decode_null_and_missing_are_absent() {
        let customer: Customer = decode_value(json!({
            "id": "cus_1",
            "email": null
        }))
        .unwrap();
        assert!(customer.email.is_none());
        assert!(customer.balance.is_none());
    }

    #[test]
    fn test_decode_rejects_non_object_root() {
        let error = decode_value::<Customer>(json!(["cus_1"])).unwrap_err();
        assert_eq!(error.field, "customer");
        assert_eq!(error.expected, "object");
        assert_eq!(error.found, JsonKind::Array);
    }

    #[test]
    fn test_decode_numeric_field_with_string_is_malformed() {
        let error = decode_value::<Charge>(json!({"id": "ch_1", "amount": "100"})).unwrap_err();
        assert_eq!(error.field, "amount");
        assert_eq!(error.expected, "integer");
        assert_eq!(error.found, JsonKind::String);
    }

    #[test]
    fn test_decode_integer_out_of_i64_range_names_field() {
        let error = decode_value::<Charge>(json!({"id": "ch_1", "amount": u64::MAX})).unwrap_err();
        assert_eq!(error.field, "amount");
        assert_eq!(error.expected, "integer");
        assert_eq!(error.found, JsonKind::Number);
    }

    #[test]
    fn test_decode_expanded_object_requires_id() {
        let error = decode_value::<Capability>(json!({
            "id": "card_payments",
            "account": {"object": "account"}
        }))
        .unwrap_err();
        assert_eq!(error.field, "account.id");
        assert_eq!(error.expected, "string");
        assert_eq!(error.found, JsonKind::Null);

        let error = decode_value::<Order>(json!({
            "id": "or_1",
            "items": [{"parent": {"id": 9, "object": "sku"}}]
        }))
        .unwrap_err();
        assert_eq!(error.field, "items[0].parent.id");
        assert_eq!(error.found, JsonKind::Number);
    }

    #[test]
    fn test_decode_list_of_shape_drifted_items() {
        let log: RequestLog = decode_value(json!({
            "requests": ["req_1", {"id": "req_2", "idempotency_key": "k2"}]
        }))
        .unwrap();
        assert_eq!(log.requests[0].id.as_deref(), Some("req_1"));
        assert_eq!(log.requests[1].idempotency_key.as_deref(), Some("k2"));

        let error = decode_value::<RequestLog>(json!({
            "requests": ["req_1", {"id": "req_2", "idempotency_key": 5}]
        }))
        .unwrap_err();
        assert_eq!(error.field, "requests[1].idempotency_key");

        let error = decode_value::<RequestLog>(json!({"requests": ["req_1", 7]})).unwrap_err();
        assert_eq!(error.field, "requests[1]");
        assert_eq!(error.expected, "string or object");

        let error = decode_value::<RequestLog>(json!({"requests": [null]})).unwrap_err();
        assert_eq!(error.field, "requests[0]");
        assert_eq!(error.found, JsonKind::Null);
    }

    #[test]
    fn test_decode_list_of_discriminated_items() {
        let log: RequestLog = decode_value(json!({
            "objects": [
                {"id": "ch_1", "object": "charge", "amount": 100},
                {"id": "pm_1", "object": "payment_method"}
            ]
        }))
        .unwrap();
        assert!(matches!(log.objects[0], AnyResource::Charge(_)));
        assert!(matches!(log.objects[1], AnyResource::Unknown(_)));

        let error = decode_value::<RequestLog>(json!({
            "objects": [{"id": "ch_1", "object": "charge"}, {"id": "ch_2", "object": "charge", "paid": "yes"}]
        }))
        .unwrap_err();
        assert_eq!(error.field, "objects[1].paid");
    }

    #[test]
    fn test_decode_scalar_with_object_is_malformed() {
        let error =
            decode_value::<Customer>(json!({"id": "cus_1", "email": {"address": "x"}})).unwrap_err();
        assert_eq!(error.field, "email");
        assert_eq!(error.found, JsonKind::Object);
    }

    #[test]
    fn test_decode_reports_indexed_paths() {
        let error = decode_value::<Order>(json!({
            "id": "or_1",
            "items": [
                {"object": "order_item", "parent": "sku_1"},
                {"object": "order_item", "parent": 5}
            ]
        }))
        .unwrap_err();
        assert_eq!(error.field, "items[1].parent");
        assert_eq!(error.found, JsonKind::Number);
    }

    #[test]
    fn test_decode_metadata_values_must_be_strings() {
        let error = decode_value::<Customer>(json!({
            "id": "cus_1",
            "metadata": {"tier": 3}
        }))
        .unwrap_err();
        assert_eq!(error.field, "metadata.tier");
    }

    #[test]
    fn test_decode_embedded_page_paths() {
        let error = decode_value::<Charge>(json!({
            "id": "ch_1",
            "refunds": {"object": "list", "data": [{"id": "re_1", "amount": true}], "has_more": false}
        }))
        .unwrap_err();
        assert_eq!(error.field, "refunds.data[0].amount");
    }

    #[test]
    fn test_decode_is_referentially_transparent() {
        let body = json!({"id": "cus_1", "email": "a@b.c", "metadata": {"k": "v"}});
        let first: Customer = decode_value(body.clone()).unwrap();
        let second: Customer = decode_value(body).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_str_rejects_invalid_json() {
        let result = decode_str::<Customer>("not json");
        assert!(matches!(result, Err(ResourceError::InvalidResponse { .. })));
    }

    #[test]
    fn test_decode_page_checks_items() {
        let page: Page<Customer> = decode_page(json!({
            "object": "list",
            "data": [{"id": "cus_1"}, {"id": "cus_2"}],
            "has_more": true,
            "url": "/v1/customers"
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(page.has_more);

        let error = decode_page::<Customer>(json!({"data": ["cus_1"]})).unwrap_err();
        assert_eq!(error.field, "data[0]");
    }

    #[test]
    fn test_encode_keeps_only_set_fields() {
        let params = OrderUpdateParams {
            status: Some("fulfilled".to_string()),
            ..Default::default()
        };
        let map = encode(&params).unwrap();
        assert_eq!(Value::Object(map), json!({"status": "fulfilled"}));
    }

    #[test]
    fn test_encode_strips_nested_nulls() {
        let map = encode(&json!({
            "a": {"b": null, "c": 1},
            "list": [null, {"d": null, "e": "x"}]
        }))
        .unwrap();
        assert_eq!(
            Value::Object(map),
            json!({"a": {"c": 1}, "list": [{"e": "x"}]})
        );
    }

    #[test]
    fn test_encode_unit_is_empty() {
        assert!(encode(&()).unwrap().is_empty());
    }

    #[test]
    fn test_encode_rejects_non_object() {
        assert!(matches!(
            encode(&vec![1, 2]),
            Err(ResourceError::Encode { .. })
        ));
    }

    #[test]
    fn test_form_encode_flattens_nested_values() {
        let map = json!({
            "amount": 100,
            "capture": false,
            "items": [{"type": "sku", "parent": "sku_1"}],
            "metadata": {},
            "description": ""
        });
        let mut pairs = form_encode(map.as_object().unwrap());
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("amount".to_string(), "100".to_string()),
                ("capture".to_string(), "false".to_string()),
                ("description".to_string(), String::new()),
                ("items[0][parent]".to_string(), "sku_1".to_string()),
                ("items[0][type]".to_string(), "sku".to_string()),
                ("metadata".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_to_form_body_percent_encodes() {
        let body = to_form_body(&[
            ("email".to_string(), "a+b@example.com".to_string()),
            ("shipping[name]".to_string(), "Jenny Rosen".to_string()),
        ]);
        assert_eq!(
            body,
            "email=a%2Bb%40example.com&shipping%5Bname%5D=Jenny%20Rosen"
        );
    }
}
