//! Exporting beans back into plain maps and JSON.
//!
//! Serialization is a pure function of the typed fields, in descriptor
//! order, and never fails. Nested beans become maps and bean lists become
//! lists of maps; everything else goes through [`IntoValue`].
//!
//! [`IntoValue`]: crate::IntoValue

use serde_json::Value;

use crate::value::{KeyStyle, RawMap};
use crate::Bean;

/// Exports `bean` into an ordered map.
///
/// [`KeyStyle::Canonical`] emits snake_case keys; [`KeyStyle::Declared`]
/// emits the alias when declared, otherwise the declared name. Excluded
/// fields are never emitted.
///
/// # Examples
///
/// ```
/// use bean_engine::{KeyStyle, derive::Bean, ser::to_plain_map};
/// use serde_json::{Value, json};
///
/// #[derive(Bean, Default)]
/// #[bean(rename_all = "camelCase")]
/// struct Login {
///     #[bean(alias = "lastLoginIp")]
///     ip: String,
///     user_id: u64,
/// }
///
/// let login = Login { ip: "10.0.0.1".into(), user_id: 7 };
///
/// let canonical = to_plain_map(&login, KeyStyle::Canonical);
/// assert_eq!(Value::Object(canonical), json!({"last_login_ip": "10.0.0.1", "user_id": 7}));
///
/// let declared = to_plain_map(&login, KeyStyle::Declared);
/// assert_eq!(Value::Object(declared), json!({"lastLoginIp": "10.0.0.1", "userId": 7}));
/// ```
pub fn to_plain_map<T: Bean>(bean: &T, style: KeyStyle) -> RawMap {
    let info = T::bean_info();
    let mut map = RawMap::with_capacity(info.field_len());

    for (index, field) in info.iter().enumerate() {
        let Some(value) = bean.field_value(index) else {
            continue;
        };
        let key = match style {
            KeyStyle::Canonical => field.canonical_key().to_owned(),
            KeyStyle::Declared => field.declared_key().to_owned(),
        };
        map.insert(key, value.to_value(style));
    }
    map
}

/// Encodes the plain map of `bean` as compact JSON.
pub fn to_json<T: Bean>(bean: &T, style: KeyStyle) -> String {
    Value::Object(to_plain_map(bean, style)).to_string()
}

/// Bean equality: the canonical plain maps are equal.
///
/// Two beans that only differ in excluded fields are equal.
pub fn bean_eq<T: Bean>(a: &T, b: &T) -> bool {
    to_plain_map(a, KeyStyle::Canonical) == to_plain_map(b, KeyStyle::Canonical)
}

/// [`IntoValue`](crate::IntoValue) of a bean. Used by generated code.
#[inline]
pub fn bean_to_value<T: Bean>(bean: &T, style: KeyStyle) -> Value {
    Value::Object(to_plain_map(bean, style))
}
