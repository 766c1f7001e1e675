//! Expandable references.
//!
//! A field such as `Charge.customer` arrives as the bare identifier
//! `"cus_123"` by default and as the full customer object when the request
//! asked for `expand[]=customer`. [`Expandable<T>`] holds exactly one of the
//! two forms; the identifier is available either way.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::Expandable;
//! use stripe_api::rest::resources::Account;
//!
//! let reference: Expandable<Account> = Expandable::id_only("acct_1");
//! assert_eq!(reference.id(), "acct_1");
//! assert!(reference.expanded_value().is_none());
//!
//! let account = Account { id: "acct_1".to_string(), ..Account::default() };
//! let expanded = Expandable::expanded(account.clone());
//! assert_eq!(expanded.id(), "acct_1");
//! assert_eq!(expanded.expanded_value(), Some(&account));
//! ```

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::rest::shape::JsonKind;

/// Types that carry their own server-assigned identifier.
pub trait HasId {
    /// Returns the identifier.
    fn id(&self) -> &str;
}

/// Either a bare identifier or the fully decoded object it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expandable<T> {
    /// Only the identifier is known.
    Id(String),
    /// The expanded object. Its identifier is read from the object itself.
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// Creates a reference holding only the identifier.
    #[must_use]
    pub fn id_only(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a reference holding the expanded value.
    #[must_use]
    pub fn expanded(value: T) -> Self {
        Self::Object(Box::new(value))
    }

    /// Returns the expanded value, if any.
    #[must_use]
    pub fn expanded_value(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(value) => Some(value),
        }
    }

    /// Returns `true` if the object form is held.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Consumes the reference, returning the expanded value if any.
    #[must_use]
    pub fn into_expanded(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(value) => Some(*value),
        }
    }
}

impl<T: HasId> Expandable<T> {
    /// Returns the identifier, whichever form is held.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(value) => value.id(),
        }
    }
}

impl<T: Serialize> Serialize for Expandable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Id(id) => serializer.serialize_str(id),
            Self::Object(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Expandable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(Self::Id(id)),
            Value::Object(map) if !map.get("id").is_some_and(Value::is_string) => Err(
                de::Error::custom("expanded object is missing a string `id`"),
            ),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self::expanded)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected identifier string or object, found {}",
                JsonKind::of(&other)
            ))),
        }
    }
}

/// Generates the paired accessors for an expandable field.
///
/// `expandable_accessors!(customer, customer_object, Customer)` produces
/// `customer() -> Option<&str>` and `customer_object() -> Option<&Customer>`.
macro_rules! expandable_accessors {
    ($field:ident, $object:ident, $ty:ty) => {
        #[doc = concat!("Returns the `", stringify!($field), "` identifier.")]
        #[must_use]
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_ref().map($crate::rest::Expandable::id)
        }

        #[doc = concat!("Returns the expanded `", stringify!($field), "`, if it was expanded.")]
        #[must_use]
        pub fn $object(&self) -> Option<&$ty> {
            self.$field
                .as_ref()
                .and_then($crate::rest::Expandable::expanded_value)
        }
    };
}

pub(crate) use expandable_accessors;
