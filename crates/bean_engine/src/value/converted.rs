use serde_json::Value;

use crate::info::FieldType;
use crate::value::{FromValue, IntoValue, KeyStyle, ValueError};

/// A field value that keeps the raw input when it does not fit `T`.
///
/// Hydration never leaves a `Converted` field at its default because of a
/// shape mismatch: the raw value is stored instead and exported unchanged.
/// Pair it with a converter to keep the unconverted input when the
/// converter fails.
///
/// # Examples
///
/// ```
/// use bean_engine::{Converted, FromValue, IntoValue, KeyStyle};
/// use serde_json::json;
///
/// let page = Converted::<i64>::from_value(json!(3)).unwrap();
/// assert_eq!(page.value(), Some(&3));
///
/// let page = Converted::<i64>::from_value(json!("abc")).unwrap();
/// assert_eq!(page.raw(), Some(&json!("abc")));
/// assert_eq!(page.to_value(KeyStyle::Canonical), json!("abc"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Converted<T> {
    Value(T),
    Raw(Value),
}

impl<T> Converted<T> {
    /// Returns the typed value, if the input fitted.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw input, if it did not fit.
    #[inline]
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Self::Value(_) => None,
            Self::Raw(v) => Some(v),
        }
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Consumes `self`, returning the typed value or the raw input.
    #[inline]
    pub fn into_result(self) -> Result<T, Value> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Raw(v) => Err(v),
        }
    }
}

impl<T: Default> Default for Converted<T> {
    #[inline]
    fn default() -> Self {
        Self::Value(T::default())
    }
}

impl<T> From<T> for Converted<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: FromValue> FromValue for Converted<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match T::from_value(value.clone()) {
            Ok(v) => Ok(Self::Value(v)),
            Err(ValueError::Mismatch { .. }) => Ok(Self::Raw(value)),
            Err(err) => Err(err),
        }
    }

    #[inline]
    fn field_type() -> FieldType {
        T::field_type()
    }

    fn from_variant(index: usize, value: Value) -> Result<Self, ValueError> {
        match T::from_variant(index, value.clone()) {
            Ok(v) => Ok(Self::Value(v)),
            Err(ValueError::Mismatch { .. }) => Ok(Self::Raw(value)),
            Err(err) => Err(err),
        }
    }
}

impl<T: IntoValue> IntoValue for Converted<T> {
    fn to_value(&self, style: KeyStyle) -> Value {
        match self {
            Self::Value(v) => v.to_value(style),
            Self::Raw(v) => v.clone(),
        }
    }
}
