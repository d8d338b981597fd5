//! Scalar converters applied before a raw value reaches [`FromValue`].
//!
//! A converter is either a plain function with the [`ConvertFn`] signature,
//! or an object implementing [`Converter`], which may carry configuration.
//! Both are stored as a [`ConverterRef`] in the field descriptor.
//!
//! A failing converter never fails hydration: the raw value is used instead.
//!
//! [`FromValue`]: crate::FromValue

// -----------------------------------------------------------------------------
// Modules

mod builtin;

// -----------------------------------------------------------------------------
// Exports

pub use builtin::{boolval, floatval, intval, strval};

use core::any::type_name;
use core::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::value::kind_of;

// -----------------------------------------------------------------------------
// ConvertError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("{0} input is not supported")]
    Unsupported(&'static str),

    #[error("`{0}` is not a valid {1}")]
    Invalid(String, &'static str),

    #[error("{0}")]
    Custom(String),
}

impl ConvertError {
    #[inline]
    pub fn unsupported(value: &Value) -> Self {
        Self::Unsupported(kind_of(value))
    }
}

// -----------------------------------------------------------------------------
// Converter

/// Signature of a converter function.
pub type ConvertFn = fn(&Value) -> Result<Value, ConvertError>;

/// A converter object with a single `convert` operation.
///
/// Unlike a [`ConvertFn`], a converter may carry configuration.
///
/// # Examples
///
/// ```
/// use bean_engine::convert::{ConvertError, Converter, ConverterRef};
/// use serde_json::{Value, json};
///
/// struct Clamp {
///     min: i64,
///     max: i64,
/// }
///
/// impl Converter for Clamp {
///     fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
///         match value.as_i64() {
///             Some(v) => Ok(json!(v.clamp(self.min, self.max))),
///             None => Err(ConvertError::unsupported(value)),
///         }
///     }
/// }
///
/// let conv = ConverterRef::new(Clamp { min: 1, max: 100 });
/// assert_eq!(conv.apply(&json!(500)), Ok(json!(100)));
/// assert_eq!(conv.apply(&json!(-3)), Ok(json!(1)));
/// ```
pub trait Converter: Send + Sync + 'static {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError>;
}

#[derive(Clone)]
enum ConverterKind {
    Func(ConvertFn),
    Object(Arc<dyn Converter>),
}

/// A converter as stored in a field descriptor.
#[derive(Clone)]
pub struct ConverterRef {
    name: &'static str,
    kind: ConverterKind,
}

impl ConverterRef {
    /// Wraps a converter function, `name` is used for diagnostics.
    #[inline]
    pub const fn func(name: &'static str, func: ConvertFn) -> Self {
        Self {
            name,
            kind: ConverterKind::Func(func),
        }
    }

    /// Wraps a converter object.
    pub fn new<C: Converter>(converter: C) -> Self {
        Self {
            name: type_name::<C>(),
            kind: ConverterKind::Object(Arc::new(converter)),
        }
    }

    /// Wraps the default instance of a converter type.
    #[inline]
    pub fn of<C: Converter + Default>() -> Self {
        Self::new(C::default())
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn apply(&self, value: &Value) -> Result<Value, ConvertError> {
        match &self.kind {
            ConverterKind::Func(func) => func(value),
            ConverterKind::Object(conv) => conv.convert(value),
        }
    }
}

impl fmt::Debug for ConverterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConverterRef").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::{Value, json};

    use super::{ConvertError, Converter, ConverterRef, intval};

    /// Prefixes strings, counting the calls.
    #[derive(Default)]
    struct Prefix {
        prefix: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl Converter for Prefix {
        fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            match value {
                Value::String(s) => Ok(Value::String(format!("{}{s}", self.prefix))),
                other => Err(ConvertError::unsupported(other)),
            }
        }
    }

    #[test]
    fn converter_objects_keep_state() {
        let calls = Arc::new(AtomicUsize::new(0));
        let conv = ConverterRef::new(Prefix {
            prefix: "id-",
            calls: Arc::clone(&calls),
        });
        assert_eq!(conv.apply(&json!("7")), Ok(json!("id-7")));
        assert!(conv.apply(&json!(7)).is_err());
        assert!(conv.name().ends_with("Prefix"));

        // Clones share the instance.
        let copy = conv.clone();
        assert_eq!(copy.apply(&json!("")), Ok(json!("id-")));
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn functions_and_defaults() {
        let func = ConverterRef::func("intval", intval);
        assert_eq!(func.apply(&json!("4")), Ok(json!(4)));
        assert_eq!(format!("{func:?}"), r#"ConverterRef("intval")"#);

        let plain = ConverterRef::of::<Prefix>();
        assert_eq!(plain.apply(&json!("x")), Ok(json!("x")));
    }
}
