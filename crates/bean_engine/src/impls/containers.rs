use std::collections::BTreeMap;

use serde_json::Value;

use crate::info::FieldType;
use crate::value::{FromValue, IntoValue, KeyStyle, RawMap, ValueError};

// -----------------------------------------------------------------------------
// Option

impl<T: FromValue> FromValue for Option<T> {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }

    #[inline]
    fn field_type() -> FieldType {
        T::field_type()
    }

    #[inline]
    fn from_variant(index: usize, value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_variant(index, value).map(Some),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    #[inline]
    fn to_value(&self, style: KeyStyle) -> Value {
        match self {
            Some(v) => v.to_value(style),
            None => Value::Null,
        }
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: FromValue> FromValue for Box<T> {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        T::from_value(value).map(Box::new)
    }

    #[inline]
    fn field_type() -> FieldType {
        T::field_type()
    }

    #[inline]
    fn from_variant(index: usize, value: Value) -> Result<Self, ValueError> {
        T::from_variant(index, value).map(Box::new)
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Box<T> {
    #[inline]
    fn to_value(&self, style: KeyStyle) -> Value {
        (**self).to_value(style)
    }
}

// -----------------------------------------------------------------------------
// Vec

/// A sequence; any element that does not fit makes the whole list a mismatch.
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("array", &other)),
        }
    }

    fn field_type() -> FieldType {
        match T::field_type() {
            FieldType::Bean(info) => FieldType::List(info),
            _ => FieldType::Scalar,
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self, style: KeyStyle) -> Value {
        Value::Array(self.iter().map(|v| v.to_value(style)).collect())
    }
}

impl<T: IntoValue> IntoValue for [T] {
    fn to_value(&self, style: KeyStyle) -> Value {
        Value::Array(self.iter().map(|v| v.to_value(style)).collect())
    }
}

// -----------------------------------------------------------------------------
// Maps

impl FromValue for RawMap {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(ValueError::mismatch("object", &other)),
        }
    }
}

impl IntoValue for RawMap {
    #[inline]
    fn to_value(&self, _: KeyStyle) -> Value {
        Value::Object(self.clone())
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(ValueError::mismatch("object", &other)),
        }
    }
}

impl<T: IntoValue> IntoValue for BTreeMap<String, T> {
    fn to_value(&self, style: KeyStyle) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value(style)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::info::FieldType;
    use crate::value::{FromValue, IntoValue, KeyStyle};

    #[test]
    fn option_null() {
        assert_eq!(Option::<u8>::from_value(json!(null)).unwrap(), None);
        assert_eq!(Option::<u8>::from_value(json!(4)).unwrap(), Some(4));
        assert_eq!(None::<u8>.to_value(KeyStyle::Canonical), json!(null));
    }

    #[test]
    fn vec_is_all_or_nothing() {
        assert_eq!(Vec::<u8>::from_value(json!([1, 2])).unwrap(), vec![1, 2]);
        assert!(Vec::<u8>::from_value(json!([1, "x"])).is_err());
        assert!(Vec::<u8>::from_value(json!({})).is_err());
        assert!(matches!(Vec::<u8>::field_type(), FieldType::Scalar));
    }

    #[test]
    fn string_maps() {
        let map = BTreeMap::<String, i32>::from_value(json!({"b": 2, "a": 1})).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.to_value(KeyStyle::Declared), json!({"a": 1, "b": 2}));
    }
}
