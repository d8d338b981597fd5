//! Conversion between raw [`Value`]s and typed field values.
//!
//! ## Menu
//!
//! - [`FromValue`]: build a typed field value from a raw value.
//! - [`IntoValue`]: project a typed field value back into a raw value.
//! - [`ValueError`]: why a raw value did not fit.
//! - [`KeyStyle`]: canonical or declared keys on output.
//! - [`Converted`]: a field that keeps the raw input when it does not fit.
//! - [`RawMap`]: the ordered raw input and output map.

// -----------------------------------------------------------------------------
// Modules

mod converted;

// -----------------------------------------------------------------------------
// Exports

pub use converted::Converted;

use serde_json::Value;
use thiserror::Error;

use crate::BeanError;
use crate::info::FieldType;

/// Ordered raw map: hydration input and serialization output.
pub type RawMap = serde_json::Map<String, Value>;

// -----------------------------------------------------------------------------
// KeyStyle

/// Key projection used when a bean is exported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStyle {
    /// Lower snake_case of the alias, or of the declared name.
    #[default]
    Canonical,
    /// The alias when declared, otherwise the declared field name.
    Declared,
}

// -----------------------------------------------------------------------------
// ValueError

/// Failure of [`FromValue`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The raw value has the wrong shape for the target type.
    ///
    /// Recovered by the hydrator: the field keeps its default.
    #[error("expected {expect}, found {found}")]
    Mismatch {
        expect: &'static str,
        found: &'static str,
    },

    /// A nested hydration failed. Propagated to the caller.
    #[error(transparent)]
    Bean(#[from] BeanError),
}

impl ValueError {
    /// Creates a [`ValueError::Mismatch`] describing `found`.
    #[inline]
    pub fn mismatch(expect: &'static str, found: &Value) -> Self {
        Self::Mismatch {
            expect,
            found: kind_of(found),
        }
    }
}

/// Returns the JSON kind of `value`, for messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// -----------------------------------------------------------------------------
// Traits

/// A type that can be built from a raw [`Value`].
///
/// Implemented for primitives, [`String`], [`Option`], [`Vec`], [`Box`],
/// ordered maps, [`Value`] itself and every bean and bean union. Serde types
/// opt in with [`impl_value_serde!`](crate::impl_value_serde).
pub trait FromValue: Sized {
    /// Builds the value, consuming the raw input.
    fn from_value(value: Value) -> Result<Self, ValueError>;

    /// Shape of this type as seen by the descriptor cache.
    #[inline]
    fn field_type() -> FieldType {
        FieldType::Scalar
    }

    /// Builds variant `index` of a bean union.
    ///
    /// Only bean unions (and wrappers forwarding to them) accept this.
    #[inline]
    fn from_variant(index: usize, value: Value) -> Result<Self, ValueError> {
        let _ = index;
        Err(ValueError::mismatch("bean union", &value))
    }
}

/// A type that can be projected back into a raw [`Value`].
///
/// Projection never fails. `style` is forwarded to nested beans.
pub trait IntoValue {
    fn to_value(&self, style: KeyStyle) -> Value;
}

// -----------------------------------------------------------------------------
// Serde bridge

/// Builds `T` from `value` through its serde implementation.
///
/// Used by [`impl_value_serde!`](crate::impl_value_serde).
pub fn from_serde<T: serde_core::de::DeserializeOwned>(
    value: Value,
    expect: &'static str,
) -> Result<T, ValueError> {
    let found = kind_of(&value);
    serde_json::from_value(value).map_err(|_| ValueError::Mismatch { expect, found })
}

/// Projects `value` through its serde implementation.
///
/// A value serde refuses to encode becomes [`Value::Null`].
pub fn to_serde<T: serde_core::Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        log::warn!("value of `{}` is not representable: {err}", core::any::type_name::<T>());
        Value::Null
    })
}

/// Implements [`FromValue`] and [`IntoValue`] for types with serde support.
///
/// The value is decoded with `serde_json::from_value`; a decoding failure is a
/// shape mismatch, so the field keeps its default.
///
/// # Examples
///
/// ```
/// use bean_engine::{FromValue, IntoValue, KeyStyle, impl_value_serde};
/// use serde_json::json;
///
/// #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
/// #[serde(rename_all = "lowercase")]
/// enum Status {
///     Active,
///     Banned,
/// }
///
/// impl_value_serde!(Status);
///
/// let status = Status::from_value(json!("banned")).unwrap();
/// assert_eq!(status, Status::Banned);
/// assert_eq!(status.to_value(KeyStyle::Canonical), json!("banned"));
/// assert!(Status::from_value(json!(3)).is_err());
/// ```
#[macro_export]
macro_rules! impl_value_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FromValue for $ty {
                #[inline]
                fn from_value(
                    value: $crate::__macro_exports::serde_json::Value,
                ) -> ::core::result::Result<Self, $crate::value::ValueError> {
                    $crate::value::from_serde(value, ::core::stringify!($ty))
                }
            }

            impl $crate::IntoValue for $ty {
                #[inline]
                fn to_value(
                    &self,
                    _: $crate::KeyStyle,
                ) -> $crate::__macro_exports::serde_json::Value {
                    $crate::value::to_serde(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{KeyStyle, ValueError, kind_of};

    #[test]
    fn kinds() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(1)), "integer");
        assert_eq!(kind_of(&json!(1.5)), "float");
        assert_eq!(kind_of(&json!("x")), "string");
        assert_eq!(kind_of(&json!([])), "array");
        assert_eq!(kind_of(&json!({})), "object");
    }

    #[test]
    fn mismatch_message() {
        let err = ValueError::mismatch("i64", &json!("abc"));
        assert_eq!(err.to_string(), "expected i64, found string");
        assert_eq!(KeyStyle::default(), KeyStyle::Canonical);
    }
}
