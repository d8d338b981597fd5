use serde_json::{Number, Value};

use crate::value::{FromValue, IntoValue, KeyStyle, ValueError};

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    let int = match &value {
                        Value::Number(n) => n
                            .as_i64()
                            .and_then(|v| <$ty>::try_from(v).ok())
                            .or_else(|| n.as_u64().and_then(|v| <$ty>::try_from(v).ok())),
                        _ => None,
                    };
                    int.ok_or_else(|| ValueError::mismatch(stringify!($ty), &value))
                }
            }

            impl IntoValue for $ty {
                #[inline]
                fn to_value(&self, _: KeyStyle) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match &value {
                        Value::Number(n) => match n.as_f64() {
                            Some(f) => Ok(f as $ty),
                            None => Err(ValueError::mismatch(stringify!($ty), &value)),
                        },
                        _ => Err(ValueError::mismatch(stringify!($ty), &value)),
                    }
                }
            }

            impl IntoValue for $ty {
                #[inline]
                fn to_value(&self, _: KeyStyle) -> Value {
                    Number::from_f64(f64::from(*self)).map_or(Value::Null, Value::Number)
                }
            }
        )+
    };
}

impl_float!(f32, f64);

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ValueError::mismatch("bool", &other)),
        }
    }
}

impl IntoValue for bool {
    #[inline]
    fn to_value(&self, _: KeyStyle) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ValueError::mismatch("string", &other)),
        }
    }
}

impl IntoValue for String {
    #[inline]
    fn to_value(&self, _: KeyStyle) -> Value {
        Value::String(self.clone())
    }
}

impl IntoValue for str {
    #[inline]
    fn to_value(&self, _: KeyStyle) -> Value {
        Value::String(self.to_owned())
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        if let Value::String(s) = &value {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }
        Err(ValueError::mismatch("char", &value))
    }
}

impl IntoValue for char {
    #[inline]
    fn to_value(&self, _: KeyStyle) -> Value {
        Value::String(self.to_string())
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl IntoValue for Value {
    #[inline]
    fn to_value(&self, _: KeyStyle) -> Value {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::value::{FromValue, IntoValue, KeyStyle, ValueError};

    #[test]
    fn integers_check_range() {
        assert_eq!(u8::from_value(json!(255)).unwrap(), 255);
        assert!(matches!(
            u8::from_value(json!(256)),
            Err(ValueError::Mismatch { expect: "u8", found: "integer" })
        ));
        assert_eq!(i64::from_value(json!(-3)).unwrap(), -3);
        assert!(i64::from_value(json!(1.5)).is_err());
        assert!(i64::from_value(json!("7")).is_err());
        assert_eq!(u64::MAX.to_value(KeyStyle::Canonical), json!(u64::MAX));
    }

    #[test]
    fn floats_accept_integers() {
        assert_eq!(f64::from_value(json!(2)).unwrap(), 2.0);
        assert_eq!(f32::from_value(json!(0.5)).unwrap(), 0.5);
        assert_eq!(f64::NAN.to_value(KeyStyle::Canonical), json!(null));
    }

    #[test]
    fn strings_and_chars() {
        assert_eq!(String::from_value(json!("bob")).unwrap(), "bob");
        assert!(String::from_value(json!(1)).is_err());
        assert_eq!(char::from_value(json!("x")).unwrap(), 'x');
        assert!(char::from_value(json!("xy")).is_err());
        assert!(bool::from_value(json!(true)).unwrap());
    }
}
