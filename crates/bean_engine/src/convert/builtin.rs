use serde_json::{Number, Value};

use super::ConvertError;

// `i64::MIN` and `-(i64::MIN)` are exact as `f64`.
const I64_RANGE: core::ops::Range<f64> = (i64::MIN as f64)..-(i64::MIN as f64);

/// Parses an integer out of a number, a numeric string or a bool.
///
/// Floats are truncated toward zero and must fit an `i64`. Strings must
/// hold an integer after trimming.
///
/// ```
/// use bean_engine::convert::intval;
/// use serde_json::json;
///
/// assert_eq!(intval(&json!(" 42 ")), Ok(json!(42)));
/// assert_eq!(intval(&json!(7.9)), Ok(json!(7)));
/// assert!(intval(&json!("abc")).is_err());
/// ```
pub fn intval(value: &Value) -> Result<Value, ConvertError> {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return Ok(value.clone());
            }
            match n.as_f64().map(f64::trunc) {
                Some(f) if I64_RANGE.contains(&f) => Ok(Value::from(f as i64)),
                _ => Err(ConvertError::Invalid(n.to_string(), "integer")),
            }
        }
        Value::Bool(b) => Ok(Value::from(i64::from(*b))),
        Value::String(s) => {
            let text = s.trim();
            if let Ok(v) = text.parse::<i64>() {
                Ok(Value::from(v))
            } else if let Ok(v) = text.parse::<u64>() {
                Ok(Value::from(v))
            } else {
                Err(ConvertError::Invalid(s.clone(), "integer"))
            }
        }
        other => Err(ConvertError::unsupported(other)),
    }
}

/// Parses a float out of a number, a numeric string or a bool.
pub fn floatval(value: &Value) -> Result<Value, ConvertError> {
    let float = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => return Err(ConvertError::unsupported(other)),
    };
    float
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ConvertError::Invalid(value.to_string(), "float"))
}

/// Reads a bool out of a bool, a number or a common flag string.
///
/// Accepted strings (case-insensitive): `1 true yes on` and `0 false no off`
/// plus the empty string.
pub fn boolval(value: &Value) -> Result<Value, ConvertError> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::Number(n) => Ok(Value::Bool(n.as_f64().is_some_and(|f| f != 0.0))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Value::Bool(true)),
            "" | "0" | "false" | "no" | "off" => Ok(Value::Bool(false)),
            _ => Err(ConvertError::Invalid(s.clone(), "bool")),
        },
        other => Err(ConvertError::unsupported(other)),
    }
}

/// Renders scalars as a string. `null` becomes the empty string.
pub fn strval(value: &Value) -> Result<Value, ConvertError> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Null => Ok(Value::String(String::new())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        other => Err(ConvertError::unsupported(other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn intval_inputs() {
        assert_eq!(intval(&json!(3)), Ok(json!(3)));
        assert_eq!(intval(&json!("-12")), Ok(json!(-12)));
        assert_eq!(intval(&json!(true)), Ok(json!(1)));
        assert_eq!(intval(&json!(-2.7)), Ok(json!(-2)));
        assert_eq!(
            intval(&json!("abc")),
            Err(ConvertError::Invalid("abc".into(), "integer"))
        );
        assert_eq!(intval(&json!([])), Err(ConvertError::Unsupported("array")));
    }

    #[test]
    fn intval_out_of_range_floats() {
        assert!(intval(&json!(1e30)).is_err());
        assert!(intval(&json!(-1e30)).is_err());
        assert!(intval(&json!(9_223_372_036_854_775_808.0)).is_err());
        assert_eq!(intval(&json!(-9_223_372_036_854_775_808.0)), Ok(json!(i64::MIN)));
        assert_eq!(intval(&json!(1e15)), Ok(json!(1_000_000_000_000_000_i64)));
    }

    #[test]
    fn floatval_inputs() {
        assert_eq!(floatval(&json!("1.5")), Ok(json!(1.5)));
        assert_eq!(floatval(&json!(2)), Ok(json!(2.0)));
        assert!(floatval(&json!("x")).is_err());
    }

    #[test]
    fn boolval_inputs() {
        assert_eq!(boolval(&json!("on")), Ok(json!(true)));
        assert_eq!(boolval(&json!("")), Ok(json!(false)));
        assert_eq!(boolval(&json!(0)), Ok(json!(false)));
        assert!(boolval(&json!("maybe")).is_err());
    }

    #[test]
    fn strval_inputs() {
        assert_eq!(strval(&json!(10)), Ok(json!("10")));
        assert_eq!(strval(&json!(null)), Ok(json!("")));
        assert!(strval(&json!({})).is_err());
    }
}
