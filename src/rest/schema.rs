//! Declarative field schemas for API objects.
//!
//! Every decodable type publishes a static [`Schema`] listing its wire fields
//! and their kinds. The codec walks the schema before materializing a value,
//! which is how a mismatch is reported with the exact field path instead of a
//! generic deserialization failure.
//!
//! Schemas reference each other through function pointers so recursive
//! shapes (an order embedding its returns, which point back at the order)
//! need no cycles in static data.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::{FieldKind, FieldSpec, ItemKind, ScalarKind, Schema};
//!
//! static PERIOD: Schema = Schema {
//!     name: "period",
//!     fields: &[FieldSpec::integer("start"), FieldSpec::integer("end")],
//! };
//!
//! assert_eq!(PERIOD.field("start").map(|f| f.name), Some("start"));
//! assert!(PERIOD.field("unknown").is_none());
//! ```

use std::fmt;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::rest::expandable::HasId;

/// Returns a type's schema.
pub type SchemaFn = fn() -> &'static Schema;

/// Looks up the schema for an `object` discriminator value.
pub type DiscriminatorFn = fn(&str) -> Option<&'static Schema>;

/// Scalar wire kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// A JSON string.
    String,
    /// A JSON number without fractional part that fits in an `i64`.
    Integer,
    /// Any JSON number.
    Float,
    /// A JSON boolean.
    Boolean,
}

impl ScalarKind {
    /// Returns `true` if `value` is of this kind.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64(),
            Self::Float => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }

    /// Returns the name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// The element kind of a list field.
#[derive(Clone, Copy)]
pub enum ItemKind {
    /// A list of scalars.
    Scalar(ScalarKind),
    /// A list of owned nested objects.
    Nested(SchemaFn),
    /// A list of expandable references.
    Expandable(SchemaFn),
    /// A list of identifiers or structured objects, element by element.
    ShapeDrifted(SchemaFn),
    /// A list of objects each selected by its `object` discriminator.
    Discriminated(DiscriminatorFn),
}

/// The declared kind of a field.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// A scalar value.
    Scalar(ScalarKind),
    /// A nested object owned by its parent.
    Nested(SchemaFn),
    /// An identifier string or the expanded object.
    Expandable(SchemaFn),
    /// An identifier string or a structured object, depending on API version.
    ShapeDrifted(SchemaFn),
    /// An object whose schema is selected by its `object` discriminator.
    /// Unknown discriminators are accepted as free-form JSON.
    Discriminated(DiscriminatorFn),
    /// An array.
    List(ItemKind),
    /// A string-keyed map of scalars (free-form metadata).
    Map(ScalarKind),
    /// An embedded list object (`{"object": "list", "data": [...]}`).
    Page(SchemaFn),
    /// Free-form JSON.
    Any,
}

impl FieldKind {
    /// Returns a short description of the accepted JSON kinds.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::Scalar(scalar) | Self::List(ItemKind::Scalar(scalar)) | Self::Map(scalar) => {
                scalar.name()
            }
            Self::Nested(_)
            | Self::Discriminated(_)
            | Self::Page(_)
            | Self::List(ItemKind::Nested(_) | ItemKind::Discriminated(_)) => "object",
            Self::Expandable(_) | Self::List(ItemKind::Expandable(_)) => {
                "identifier string or object"
            }
            Self::ShapeDrifted(_) | Self::List(ItemKind::ShapeDrifted(_)) => "string or object",
            Self::Any => "any",
        }
    }
}

impl From<ItemKind> for FieldKind {
    fn from(item: ItemKind) -> Self {
        match item {
            ItemKind::Scalar(scalar) => Self::Scalar(scalar),
            ItemKind::Nested(schema) => Self::Nested(schema),
            ItemKind::Expandable(schema) => Self::Expandable(schema),
            ItemKind::ShapeDrifted(schema) => Self::ShapeDrifted(schema),
            ItemKind::Discriminated(lookup) => Self::Discriminated(lookup),
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "Scalar({scalar:?})"),
            Self::Nested(schema) => write!(f, "Nested({})", schema().name),
            Self::Expandable(schema) => write!(f, "Expandable({})", schema().name),
            Self::ShapeDrifted(schema) => write!(f, "ShapeDrifted({})", schema().name),
            Self::Discriminated(_) => f.write_str("Discriminated"),
            Self::List(item) => write!(f, "List({:?})", FieldKind::from(*item)),
            Self::Map(scalar) => write!(f, "Map({scalar:?})"),
            Self::Page(schema) => write!(f, "Page({})", schema().name),
            Self::Any => f.write_str("Any"),
        }
    }
}

/// A declared wire field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// The wire key.
    pub name: &'static str,
    /// The declared kind.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a field of any kind.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// A string field.
    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::String))
    }

    /// An integer field (amounts, counts, unix timestamps).
    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Integer))
    }

    /// A floating point field.
    #[must_use]
    pub const fn float(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Float))
    }

    /// A boolean field.
    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Boolean))
    }

    /// An owned nested object.
    #[must_use]
    pub const fn nested(name: &'static str, schema: SchemaFn) -> Self {
        Self::new(name, FieldKind::Nested(schema))
    }

    /// An expandable reference.
    #[must_use]
    pub const fn expandable(name: &'static str, schema: SchemaFn) -> Self {
        Self::new(name, FieldKind::Expandable(schema))
    }

    /// A shape-drifted field.
    #[must_use]
    pub const fn shape_drifted(name: &'static str, schema: SchemaFn) -> Self {
        Self::new(name, FieldKind::ShapeDrifted(schema))
    }

    /// A discriminated polymorphic object.
    #[must_use]
    pub const fn discriminated(name: &'static str, lookup: DiscriminatorFn) -> Self {
        Self::new(name, FieldKind::Discriminated(lookup))
    }

    /// A list field.
    #[must_use]
    pub const fn list(name: &'static str, item: ItemKind) -> Self {
        Self::new(name, FieldKind::List(item))
    }

    /// A `metadata`-style map of strings.
    #[must_use]
    pub const fn metadata(name: &'static str) -> Self {
        Self::new(name, FieldKind::Map(ScalarKind::String))
    }

    /// An embedded list object.
    #[must_use]
    pub const fn page(name: &'static str, schema: SchemaFn) -> Self {
        Self::new(name, FieldKind::Page(schema))
    }

    /// A free-form JSON field.
    #[must_use]
    pub const fn any(name: &'static str) -> Self {
        Self::new(name, FieldKind::Any)
    }
}

/// The declared wire fields of one type.
#[derive(Debug)]
pub struct Schema {
    /// The type's name, used in error paths for root values.
    pub name: &'static str,
    /// Declared fields. Fields not listed are never validated.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Looks up a field by wire key.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A type decodable from an API payload.
///
/// # Implementing
///
/// ```rust,ignore
/// impl ApiObject for Period {
///     fn schema() -> &'static Schema {
///         static SCHEMA: Schema = Schema {
///             name: "period",
///             fields: &[FieldSpec::integer("start"), FieldSpec::integer("end")],
///         };
///         &SCHEMA
///     }
/// }
/// ```
pub trait ApiObject:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Returns the type's field schema.
    fn schema() -> &'static Schema;
}

/// A top-level API resource with an identifier and `object` discriminator.
pub trait ApiResource: ApiObject + HasId {
    /// The `object` discriminator value, e.g. `"charge"`.
    const OBJECT: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static INNER: Schema = Schema {
        name: "inner",
        fields: &[FieldSpec::string("id")],
    };

    fn inner() -> &'static Schema {
        &INNER
    }

    #[test]
    fn test_scalar_kinds_accept_matching_values() {
        assert!(ScalarKind::String.accepts(&json!("a")));
        assert!(!ScalarKind::String.accepts(&json!(1)));

        assert!(ScalarKind::Integer.accepts(&json!(1)));
        assert!(ScalarKind::Integer.accepts(&json!(-1)));
        assert!(!ScalarKind::Integer.accepts(&json!(1.5)));
        assert!(!ScalarKind::Integer.accepts(&json!("1")));
        assert!(ScalarKind::Integer.accepts(&json!(i64::MAX)));
        assert!(!ScalarKind::Integer.accepts(&json!(u64::MAX)));

        assert!(ScalarKind::Float.accepts(&json!(1)));
        assert!(ScalarKind::Float.accepts(&json!(1.5)));

        assert!(ScalarKind::Boolean.accepts(&json!(false)));
        assert!(!ScalarKind::Boolean.accepts(&json!(0)));
    }

    #[test]
    fn test_field_kind_expected_descriptions() {
        assert_eq!(FieldKind::Scalar(ScalarKind::Integer).expected(), "integer");
        assert_eq!(FieldKind::Nested(inner).expected(), "object");
        assert_eq!(
            FieldKind::Expandable(inner).expected(),
            "identifier string or object"
        );
        assert_eq!(FieldKind::ShapeDrifted(inner).expected(), "string or object");
        assert_eq!(FieldKind::Any.expected(), "any");
    }

    #[test]
    fn test_list_item_kinds_map_to_field_kinds() {
        fn lookup(_: &str) -> Option<&'static Schema> {
            None
        }

        assert_eq!(
            FieldKind::List(ItemKind::ShapeDrifted(inner)).expected(),
            "string or object"
        );
        assert_eq!(FieldKind::List(ItemKind::Discriminated(lookup)).expected(), "object");
        assert!(matches!(
            FieldKind::from(ItemKind::ShapeDrifted(inner)),
            FieldKind::ShapeDrifted(_)
        ));
        assert!(matches!(
            FieldKind::from(ItemKind::Discriminated(lookup)),
            FieldKind::Discriminated(_)
        ));
    }

    #[test]
    fn test_field_kind_debug_names_schema() {
        let kind = FieldKind::List(ItemKind::Expandable(inner));
        assert_eq!(format!("{kind:?}"), "List(Expandable(inner))");
    }

    #[test]
    fn test_schema_field_lookup() {
        let field = INNER.field("id").unwrap();
        assert_eq!(field.name, "id");
        assert!(matches!(field.kind, FieldKind::Scalar(ScalarKind::String)));
    }
}
