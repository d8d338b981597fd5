//! Populating beans from raw maps.
//!
//! [`hydrate`] starts from `T::default()` and lets the generated
//! [`Bean::hydrate_fields`] pull every field through [`HydrateContext::field`],
//! which runs the conversion pipeline:
//!
//! 1. Look the field up under its alias, its declared name, then its
//!    canonical key. Absent fields keep their default.
//! 2. Apply the converter, if any. A failing converter leaves the raw value.
//! 3. Union fields pick their variant from the sibling discriminator.
//! 4. Build the typed value with [`FromValue`]: nested beans and bean lists
//!    hydrate recursively. A value of the wrong shape leaves the default.

use log::{debug, trace, warn};
use serde_json::Value;

use crate::info::{BeanInfo, FieldDescriptor, FieldType};
use crate::utils::canonical_key;
use crate::value::{FromValue, RawMap, ValueError, kind_of};
use crate::{Bean, BeanError};

// -----------------------------------------------------------------------------
// Entry points

/// Hydrates a new `T` from `input`.
///
/// Missing keys are not an error. Fails on inconsistent metadata of `T`
/// (or of a nested type that is reached), and on unresolvable union
/// discriminators.
///
/// # Examples
///
/// ```
/// use bean_engine::{Converted, derive::Bean, hydrate::hydrate};
/// use serde_json::json;
///
/// #[derive(Bean, Default)]
/// struct Query {
///     #[bean(converter = bean_engine::convert::intval)]
///     page: Converted<i64>,
///     size: u32,
/// }
///
/// let input = json!({ "page": "2", "size": "many" });
/// let query: Query = hydrate(input.as_object().unwrap()).unwrap();
/// assert_eq!(query.page, Converted::Value(2));
/// assert_eq!(query.size, 0);
///
/// let input = json!({ "page": "abc" });
/// let query: Query = hydrate(input.as_object().unwrap()).unwrap();
/// assert_eq!(query.page, Converted::Raw(json!("abc")));
/// ```
pub fn hydrate<T: Bean>(input: &RawMap) -> Result<T, BeanError> {
    let info = T::describe()?;
    trace!("hydrating `{}` from {} keys", info.type_name(), input.len());

    let cx = HydrateContext { info, input };
    let mut bean = T::default();
    bean.hydrate_fields(&cx)?;
    Ok(bean)
}

/// Parses `json` and hydrates a new `T` from the top-level object.
///
/// ```
/// use bean_engine::{BeanError, derive::Bean, hydrate::from_json};
///
/// #[derive(Bean, Default)]
/// struct Ping { seq: u32 }
///
/// assert_eq!(from_json::<Ping>(r#"{"seq": 9}"#).unwrap().seq, 9);
/// assert!(matches!(from_json::<Ping>("[1]"), Err(BeanError::InvalidInput("array"))));
/// assert!(matches!(from_json::<Ping>("{"), Err(BeanError::Json(_))));
/// ```
pub fn from_json<T: Bean>(json: &str) -> Result<T, BeanError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => hydrate(&map),
        other => Err(BeanError::InvalidInput(kind_of(&other))),
    }
}

/// [`FromValue`] of a bean: a map hydrates, anything else is a mismatch.
///
/// Used by generated code.
pub fn bean_from_value<T: Bean>(value: Value) -> Result<T, ValueError> {
    match value {
        Value::Object(map) => hydrate(&map).map_err(ValueError::Bean),
        other => Err(ValueError::mismatch(T::bean_info().type_name(), &other)),
    }
}

// -----------------------------------------------------------------------------
// HydrateContext

/// One bean being hydrated: its descriptors and its raw input.
#[derive(Clone, Copy, Debug)]
pub struct HydrateContext<'a> {
    info: &'static BeanInfo,
    input: &'a RawMap,
}

impl<'a> HydrateContext<'a> {
    #[inline]
    pub fn info(&self) -> &'static BeanInfo {
        self.info
    }

    #[inline]
    pub fn input(&self) -> &'a RawMap {
        self.input
    }

    /// Returns the raw value of `field`: under its alias, its declared name,
    /// then its canonical key.
    pub fn locate(&self, field: &FieldDescriptor) -> Option<&'a Value> {
        field.lookup_keys().find_map(|key| self.input.get(key))
    }

    /// Runs the conversion pipeline for field `index` and stores the result
    /// into `slot`.
    ///
    /// `slot` is left untouched when the field is absent or its value does
    /// not fit `T`.
    pub fn field<T: FromValue>(&self, index: usize, slot: &mut T) -> Result<(), BeanError> {
        let Some(field) = self.info.field_at(index) else {
            return Ok(());
        };
        let Some(raw) = self.locate(field) else {
            return Ok(());
        };

        let value = self.convert(field, raw);
        let result = match field.union_discriminator() {
            Some(disc) if !value.is_null() => {
                let variant = self.resolve_variant(field, disc)?;
                T::from_variant(variant, value)
            }
            _ => T::from_value(value),
        };

        match result {
            Ok(typed) => *slot = typed,
            Err(ValueError::Mismatch { expect, found }) => warn!(
                "`{}.{}` expects {expect}, found {found}; keeping the default",
                self.info.type_name(),
                field.name(),
            ),
            Err(ValueError::Bean(err)) => return Err(err),
        }
        Ok(())
    }

    fn convert(&self, field: &FieldDescriptor, raw: &Value) -> Value {
        let Some(converter) = field.converter() else {
            return raw.clone();
        };
        converter.apply(raw).unwrap_or_else(|err| {
            debug!(
                "converter `{}` failed on `{}.{}`: {err}; using the raw value",
                converter.name(),
                self.info.type_name(),
                field.name(),
            );
            raw.clone()
        })
    }

    fn resolve_variant(&self, field: &FieldDescriptor, disc: &'static str) -> Result<usize, BeanError> {
        let unresolved = |value: String| BeanError::UnresolvedDiscriminator {
            bean: self.info.type_name(),
            field: field.name(),
            discriminator: disc,
            value,
        };

        let tag = match self.info.field(disc) {
            Some(sibling) => self.locate(sibling),
            None => self
                .input
                .get(disc)
                .or_else(|| self.input.get(&canonical_key(disc))),
        };
        let tag = match tag {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            Some(other) => return Err(unresolved(other.to_string())),
            None => return Err(unresolved("<absent>".to_owned())),
        };

        let FieldType::Union(union_info) = field.field_type() else {
            return Err(unresolved(tag));
        };
        union_info().variant_of(&tag).ok_or_else(|| unresolved(tag))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::convert::{ConvertError, Converter};
    use crate::derive::{Bean, BeanUnion};
    use crate::{Bean as _, BeanAccess, BeanError, ConfigError, Converted, KeyStyle, RawMap};

    #[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Status {
        #[default]
        Active,
        Banned,
    }

    crate::impl_value_serde!(Status);

    /// `1` is active, `2` is banned.
    #[derive(Default)]
    struct StatusCode;

    impl Converter for StatusCode {
        fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
            match value.as_i64() {
                Some(1) => Ok(json!("active")),
                Some(2) => Ok(json!("banned")),
                _ => Err(ConvertError::unsupported(value)),
            }
        }
    }

    #[derive(Bean, Default, Debug)]
    struct BookBean {
        name: String,
    }

    #[derive(Bean, Debug)]
    #[bean(skip = [pivot], partial_eq)]
    struct SampleBean {
        pivot: String,
        username: String,
        #[bean(alias = "latest_login_ip")]
        login_ip: String,
        books: Vec<BookBean>,
        #[bean(converter = crate::convert::intval)]
        page: Converted<i64>,
        #[bean(converter_type = StatusCode)]
        status: Status,
    }

    impl Default for SampleBean {
        fn default() -> Self {
            Self {
                pivot: String::new(),
                username: String::new(),
                login_ip: String::new(),
                books: Vec::new(),
                page: Converted::Value(1),
                status: Status::default(),
            }
        }
    }

    #[derive(Bean, Default, Debug)]
    struct SampleBean2 {
        username: String,
        subs: Vec<SampleBean>,
    }

    #[derive(Bean, Default, Debug, PartialEq)]
    #[bean(rename_all = "camelCase")]
    struct TextSettings {
        min_length: u32,
        max_length: u32,
    }

    #[derive(Bean, Default, Debug, PartialEq)]
    #[bean(rename_all = "camelCase")]
    struct NumberSettings {
        min_value: i64,
        max_value: i64,
    }

    #[derive(BeanUnion, Debug, PartialEq)]
    enum Settings {
        Text(TextSettings),
        Number(NumberSettings),
    }

    #[derive(Bean, Default, Debug)]
    struct Component {
        r#type: String,
        #[bean(union = "type")]
        settings: Option<Settings>,
    }

    fn input(value: Value) -> RawMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn sample_data() -> Value {
        json!({
            "username": "bob",
            "latest_login_ip": "127.0.0.1",
            "books": [
                { "name": "Programming Rust: Fast, Safe Systems Development" },
                { "name": "Rust for Rustaceans" },
            ],
        })
    }

    #[test]
    fn initializes_with_data() {
        let data = input(sample_data());
        let bean = SampleBean::hydrate(&data).unwrap();

        let out = bean.to_plain_map(KeyStyle::Declared);
        for (key, value) in &data {
            assert_eq!(&out[key], value, "key `{key}`");
        }
        assert_eq!(out["page"], json!(1));
        assert_eq!(out["status"], json!("active"));
    }

    #[test]
    fn converts_to_json() {
        let bean = SampleBean::hydrate(&input(sample_data())).unwrap();
        let json: Value = serde_json::from_str(&bean.to_json()).unwrap();

        for (key, value) in input(sample_data()) {
            assert_eq!(json[&key], value, "key `{key}`");
        }
    }

    #[test]
    fn initializes_bean_lists() {
        let bean = SampleBean::hydrate(&input(sample_data())).unwrap();
        let names: Vec<_> = bean.books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Programming Rust: Fast, Safe Systems Development",
                "Rust for Rustaceans",
            ]
        );
    }

    #[test]
    fn alias_declared_name_and_canonical_key() {
        for key in ["latest_login_ip", "login_ip"] {
            let bean = SampleBean::hydrate(&input(json!({ key: "10.0.0.1" }))).unwrap();
            assert_eq!(bean.login_ip, "10.0.0.1");
        }

        // The alias wins when both are present.
        let bean = SampleBean::hydrate(&input(json!({
            "login_ip": "b",
            "latest_login_ip": "a",
        })))
        .unwrap();
        assert_eq!(bean.login_ip, "a");
    }

    #[test]
    fn converter_success_and_fallback() {
        let bean = SampleBean::hydrate(&input(json!({ "page": "5" }))).unwrap();
        assert_eq!(bean.page, Converted::Value(5));

        let bean = SampleBean::hydrate(&input(json!({ "page": "abc" }))).unwrap();
        assert_eq!(bean.page, Converted::Raw(json!("abc")));
        assert_eq!(bean.to_map()["page"], json!("abc"));

        let bean = SampleBean::hydrate(&input(json!({ "status": 2 }))).unwrap();
        assert_eq!(bean.status, Status::Banned);

        // The raw `9` reaches `Status`, which refuses it.
        let bean = SampleBean::hydrate(&input(json!({ "status": 9 }))).unwrap();
        assert_eq!(bean.status, Status::Active);
    }

    #[test]
    fn excluded_fields_are_ignored() {
        let mut bean = SampleBean::hydrate(&input(json!({
            "pivot": "hidden",
            "username": "bob",
        })))
        .unwrap();

        assert_eq!(bean.pivot, "");
        assert!(!bean.to_map().contains_key("pivot"));

        bean.set("pivot", String::from("still hidden")).unwrap();
        assert_eq!(bean.pivot, "");
        assert!(matches!(
            bean.get::<String>("pivot"),
            Err(BeanError::PropertyNotFound { .. })
        ));
    }

    #[test]
    fn mismatched_values_keep_defaults() {
        let bean = SampleBean::hydrate(&input(json!({
            "username": 5,
            "login_ip": null,
            "books": [{ "name": "A" }, 3],
        })))
        .unwrap();

        assert_eq!(bean.username, "");
        assert_eq!(bean.login_ip, "");
        assert!(bean.books.is_empty());
    }

    #[test]
    fn nested_bean_lists() {
        let mut data = sample_data();
        data["username"] = json!("child");
        let bean = SampleBean2::hydrate(&input(json!({
            "username": "root",
            "subs": [data.clone(), { "username": "second" }],
        })))
        .unwrap();

        assert_eq!(bean.username, "root");
        assert_eq!(bean.subs.len(), 2);
        assert_eq!(bean.subs[0].username, "child");
        assert_eq!(bean.subs[0].books.len(), 2);
        assert_eq!(bean.subs[1].page, Converted::Value(1));

        let out = bean.to_map();
        assert_eq!(out["subs"][0]["books"][1]["name"], data["books"][1]["name"]);
    }

    #[test]
    fn union_selects_variant() {
        let text = Component::from_json(
            r#"{"type":"text","settings":{"minLength":1,"maxLength":20}}"#,
        )
        .unwrap();
        assert_eq!(
            text.settings,
            Some(Settings::Text(TextSettings {
                min_length: 1,
                max_length: 20,
            }))
        );

        let number = Component::from_json(
            r#"{"type":"number","settings":{"minValue":-5,"maxValue":5}}"#,
        )
        .unwrap();
        assert_eq!(
            number.settings,
            Some(Settings::Number(NumberSettings {
                min_value: -5,
                max_value: 5,
            }))
        );
        assert_eq!(
            number.to_plain_map(KeyStyle::Declared)["settings"],
            json!({ "minValue": -5, "maxValue": 5 })
        );
        assert_eq!(
            number.to_map()["settings"],
            json!({ "min_value": -5, "max_value": 5 })
        );
    }

    #[test]
    fn union_discriminator_errors() {
        let err = Component::from_json(r#"{"type":"date","settings":{}}"#).unwrap_err();
        assert!(matches!(
            err,
            BeanError::UnresolvedDiscriminator { field: "settings", discriminator: "type", ref value, .. }
                if value == "date"
        ));

        let err = Component::from_json(r#"{"settings":{}}"#).unwrap_err();
        assert!(matches!(err, BeanError::UnresolvedDiscriminator { .. }));

        // A null union value needs no discriminator.
        let bean = Component::from_json(r#"{"settings":null}"#).unwrap();
        assert_eq!(bean.settings, None);

        // Without the union value the discriminator is never consulted.
        let bean = Component::from_json(r#"{"type":"date"}"#).unwrap();
        assert_eq!(bean.r#type, "date");
        assert_eq!(bean.settings, None);
    }

    #[derive(Bean, Default)]
    struct Clash {
        #[bean(alias = "name")]
        title: String,
        name: String,
    }

    #[test]
    fn configuration_errors_repeat() {
        for _ in 0..2 {
            let err = Clash::hydrate(&RawMap::new()).err();
            assert!(matches!(
                err,
                Some(BeanError::Config(ConfigError::AmbiguousKey { field: "title", other: "name", .. }))
            ));
        }
        assert!(Clash::describe().is_err());
    }

    #[derive(Bean, Default)]
    struct Holder {
        clash: Option<Clash>,
    }

    #[test]
    fn nested_configuration_errors_propagate() {
        assert!(Holder::hydrate(&RawMap::new()).is_ok());
        assert!(matches!(
            Holder::from_json(r#"{"clash":{}}"#),
            Err(BeanError::Config(ConfigError::AmbiguousKey { .. }))
        ));
    }

    #[test]
    fn descriptors_are_cached() {
        let a = SampleBean::bean_info();
        let b = SampleBean::describe().unwrap();
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn equality_ignores_excluded_fields() {
        let a = SampleBean::hydrate(&input(sample_data())).unwrap();
        let mut b = SampleBean::hydrate(&input(sample_data())).unwrap();
        b.pivot = String::from("different");
        assert_eq!(a, b);

        b.username = String::from("alice");
        assert_ne!(a, b);
    }

    #[test]
    fn absent_keys_keep_defaults() {
        let bean = SampleBean::hydrate(&RawMap::new()).unwrap();
        assert_eq!(bean.username, "");
        assert_eq!(bean.page, Converted::Value(1));
        assert_eq!(bean.status, Status::Active);
    }

    /// Clamps integers into `min..=max`.
    struct Clamp {
        min: i64,
        max: i64,
    }

    impl Converter for Clamp {
        fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
            match value.as_i64() {
                Some(v) => Ok(json!(v.clamp(self.min, self.max))),
                None => Err(ConvertError::unsupported(value)),
            }
        }
    }

    #[derive(Bean, Default, Debug)]
    #[bean(rename_all = "camelCase")]
    struct Order {
        #[bean(alias = "latest_login_ip")]
        login_ip: String,
        order_id: u64,
        address_line1: String,
        #[bean(list = BookBean)]
        books: Vec<BookBean>,
        #[bean(converter = crate::convert::intval)]
        page: Converted<i64>,
        #[bean(converter_with = Clamp { min: 1, max: 50 })]
        page_size: Converted<i64>,
        r#type: String,
        #[bean(union = "type")]
        settings: Converted<Option<Settings>>,
    }

    fn order_data() -> Value {
        json!({
            "latest_login_ip": "10.0.0.2",
            "orderId": 42,
            "addressLine1": "1 Main St",
            "books": [{ "name": "Rust for Rustaceans" }, { "name": "Rust Atomics and Locks" }],
            "page": "abc",
            "pageSize": 500,
            "type": "text",
            "settings": { "minLength": 2, "maxLength": 8 },
        })
    }

    #[test]
    fn plain_maps_survive_rehydration() {
        let order = Order::hydrate(&input(order_data())).unwrap();
        assert_eq!(order.order_id, 42);
        assert_eq!(order.books[1].name, "Rust Atomics and Locks");
        assert_eq!(order.page, Converted::Raw(json!("abc")));
        assert_eq!(order.page_size, Converted::Value(50));
        assert_eq!(
            order.settings,
            Converted::Value(Some(Settings::Text(TextSettings {
                min_length: 2,
                max_length: 8,
            })))
        );

        for style in [KeyStyle::Canonical, KeyStyle::Declared] {
            let first = order.to_plain_map(style);
            let again = Order::hydrate(&first).unwrap().to_plain_map(style);
            assert_eq!(first, again, "{style:?}");
        }
    }

    #[test]
    fn key_style_toggle() {
        let order = Order::hydrate(&input(order_data())).unwrap();

        let canonical = order.to_map();
        assert_eq!(
            canonical.keys().map(String::as_str).collect::<Vec<_>>(),
            [
                "latest_login_ip",
                "order_id",
                "address_line1",
                "books",
                "page",
                "page_size",
                "type",
                "settings",
            ]
        );
        assert_eq!(canonical["settings"], json!({ "min_length": 2, "max_length": 8 }));

        let mut expected = order_data();
        expected["pageSize"] = json!(50);
        let declared = order.to_plain_map(KeyStyle::Declared);
        assert!(declared.contains_key("orderId"));
        assert_eq!(Value::Object(declared), expected);
    }

    #[test]
    fn union_shape_mismatch_keeps_raw() {
        let mut data = order_data();
        data["settings"] = json!("compact");
        let order = Order::hydrate(&input(data)).unwrap();
        assert_eq!(order.settings, Converted::Raw(json!("compact")));
        assert_eq!(order.to_map()["settings"], json!("compact"));

        data = order_data();
        data["type"] = json!("number");
        data["settings"] = json!({ "minValue": -1 });
        let order = Order::hydrate(&input(data)).unwrap();
        assert_eq!(
            order.settings,
            Converted::Value(Some(Settings::Number(NumberSettings {
                min_value: -1,
                max_value: 0,
            })))
        );
    }

    #[derive(Bean, Default, Debug)]
    struct Addr {
        address_line1: String,
        ip_v4: String,
        #[bean(alias = "zip5")]
        zip: String,
    }

    #[test]
    fn digits_in_keys() {
        let addr = Addr::hydrate(&input(json!({
            "address_line1": "x",
            "ip_v4": "1.2.3.4",
            "zip5": "12345",
        })))
        .unwrap();

        assert_eq!(
            Value::Object(addr.to_map()),
            json!({ "address_line1": "x", "ip_v4": "1.2.3.4", "zip5": "12345" })
        );
    }
}
