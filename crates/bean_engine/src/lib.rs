#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `::bean_engine`, which must also resolve
// inside the crate itself (unit tests use the derive).
extern crate self as bean_engine;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod access;
pub mod convert;
pub mod hydrate;
pub mod impls;
pub mod info;
pub mod mock;
pub mod registry;
pub mod ser;
pub mod utils;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use access::BeanAccess;
pub use bean_engine_derive as derive;
pub use error::{BeanError, ConfigError};
pub use value::{Converted, FromValue, IntoValue, KeyStyle, RawMap};

use core::any::Any;

use crate::hydrate::HydrateContext;
use crate::info::{BeanInfo, UnionInfo};

// -----------------------------------------------------------------------------
// Bean

/// A typed object populated from, and exportable back to, an untyped map.
///
/// Implemented by [`#[derive(Bean)]`](crate::derive::Bean). The required
/// methods are generated; the provided ones are the public entry points.
///
/// # Examples
///
/// ```
/// use bean_engine::{Bean, KeyStyle, derive::Bean};
/// use serde_json::json;
///
/// #[derive(Bean, Default)]
/// #[bean(rename_all = "camelCase")]
/// struct User {
///     user_id: u64,
/// }
///
/// let input = json!({ "userId": 1 });
/// let user = User::hydrate(input.as_object().unwrap()).unwrap();
/// assert_eq!(user.user_id, 1);
///
/// assert!(user.to_plain_map(KeyStyle::Canonical).contains_key("user_id"));
/// assert!(user.to_plain_map(KeyStyle::Declared).contains_key("userId"));
/// ```
pub trait Bean: Default + FromValue + IntoValue + 'static {
    /// The cached field descriptors of this type.
    ///
    /// Built on first access. Use [`Bean::describe`] to also surface
    /// configuration errors.
    fn bean_info() -> &'static BeanInfo;

    /// Stores every resolvable field of the input into `self`.
    #[doc(hidden)]
    fn hydrate_fields(&mut self, cx: &HydrateContext<'_>) -> Result<(), BeanError>;

    /// Returns the field at `index` (descriptor order) for serialization.
    fn field_value(&self, index: usize) -> Option<&dyn IntoValue>;

    /// Returns the field at `index` (descriptor order) as `Any`.
    fn field_any(&self, index: usize) -> Option<&dyn Any>;

    /// Returns the field at `index` (descriptor order) as mutable `Any`.
    fn field_any_mut(&mut self, index: usize) -> Option<&mut dyn Any>;

    /// Returns the validated descriptors of this type.
    ///
    /// Fails with [`BeanError::Config`] when the declared metadata is
    /// inconsistent. The same error is returned on every call.
    fn describe() -> Result<&'static BeanInfo, BeanError> {
        let info = Self::bean_info();
        info.check()?;
        Ok(info)
    }

    /// Hydrates a new instance from `input`.
    ///
    /// See [`hydrate::hydrate`].
    #[inline]
    fn hydrate(input: &RawMap) -> Result<Self, BeanError> {
        hydrate::hydrate(input)
    }

    /// Parses `json` and hydrates a new instance from the top-level object.
    #[inline]
    fn from_json(json: &str) -> Result<Self, BeanError> {
        hydrate::from_json(json)
    }

    /// Exports the instance into a plain ordered map.
    #[inline]
    fn to_plain_map(&self, style: KeyStyle) -> RawMap {
        ser::to_plain_map(self, style)
    }

    /// Exports the instance into a plain ordered map with canonical keys.
    #[inline]
    fn to_map(&self) -> RawMap {
        ser::to_plain_map(self, KeyStyle::Canonical)
    }

    /// Encodes the canonical plain map as JSON.
    #[inline]
    fn to_json(&self) -> String {
        ser::to_json(self, KeyStyle::Canonical)
    }

    /// Bean equality: both canonical plain maps are equal.
    #[inline]
    fn bean_eq(&self, other: &Self) -> bool {
        ser::bean_eq(self, other)
    }
}

// -----------------------------------------------------------------------------
// BeanUnion

/// An enum of beans, one selected per value by a sibling discriminator.
///
/// Implemented by [`#[derive(BeanUnion)]`](crate::derive::BeanUnion), which
/// also implements [`FromValue::from_variant`] and [`IntoValue`]. A field of
/// a union type names its discriminator with `#[bean(union = "field")]`.
///
/// # Examples
///
/// ```
/// use bean_engine::{Bean, derive::{Bean, BeanUnion}};
/// use serde_json::json;
///
/// #[derive(Bean, Default)]
/// struct TextSettings { max_length: u32 }
///
/// #[derive(Bean, Default)]
/// struct NumberSettings { min: i64, max: i64 }
///
/// #[derive(BeanUnion)]
/// enum Settings {
///     #[bean(tag = "text")]
///     Text(TextSettings),
///     #[bean(tag = "number")]
///     Number(NumberSettings),
/// }
///
/// #[derive(Bean, Default)]
/// struct Component {
///     r#type: String,
///     #[bean(union = "type")]
///     settings: Option<Settings>,
/// }
///
/// let c = Component::from_json(r#"{"type":"number","settings":{"min":1,"max":9}}"#).unwrap();
/// assert!(matches!(c.settings, Some(Settings::Number(NumberSettings { min: 1, max: 9 }))));
/// assert_eq!(c.to_json(), r#"{"type":"number","settings":{"min":1,"max":9}}"#);
/// ```
pub trait BeanUnion: FromValue + IntoValue + 'static {
    /// The cached tag table of this union.
    fn union_info() -> &'static UnionInfo;
}
