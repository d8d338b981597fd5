use core::any::{Any, TypeId};
use core::fmt;

use crate::convert::ConverterRef;
use crate::info::{BeanInfo, MockSpec, UnionInfo};
use crate::utils::canonical_key;
use crate::value::{Converted, FromValue};
use crate::Bean;

// -----------------------------------------------------------------------------
// FieldType

/// Declared shape of a field, as far as the engine cares.
///
/// Nested infos are held as function pointers and built on first access,
/// so self-referential beans are fine.
#[derive(Clone, Copy)]
pub enum FieldType {
    /// Anything stored as-is after conversion.
    Scalar,
    /// A nested bean, hydrated from a map.
    Bean(fn() -> &'static BeanInfo),
    /// A homogeneous list of beans, hydrated from a sequence of maps.
    List(fn() -> &'static BeanInfo),
    /// A bean union, resolved through a sibling discriminator.
    Union(fn() -> &'static UnionInfo),
}

impl FieldType {
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar)
    }

    /// Returns the nested bean info of a `Bean` or `List` field.
    #[inline]
    pub fn bean_info(&self) -> Option<&'static BeanInfo> {
        match self {
            Self::Bean(f) | Self::List(f) => Some(f()),
            _ => None,
        }
    }

    #[inline]
    pub fn union_info(&self) -> Option<&'static UnionInfo> {
        match self {
            Self::Union(f) => Some(f()),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the names: nested infos may refer back to this one.
        match self {
            Self::Scalar => f.write_str("Scalar"),
            Self::Bean(info) => f.debug_tuple("Bean").field(&info().type_path()).finish(),
            Self::List(info) => f.debug_tuple("List").field(&info().type_path()).finish(),
            Self::Union(info) => f.debug_tuple("Union").field(&info().type_path()).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// BeanList

/// Field types holding a homogeneous list of beans.
///
/// `#[bean(list = Elem)]` only compiles on a field whose type is a
/// `BeanList` of `Elem`.
///
/// ```compile_fail
/// use bean_engine::derive::Bean;
///
/// #[derive(Bean, Default)]
/// struct Book { name: String }
///
/// #[derive(Bean, Default)]
/// struct Shelf {
///     #[bean(list = Book)]
///     books: Vec<serde_json::Value>,
/// }
/// ```
pub trait BeanList {
    type Element: Bean;
}

impl<T: Bean> BeanList for Vec<T> {
    type Element = T;
}

impl<L: BeanList> BeanList for Option<L> {
    type Element = L::Element;
}

impl<L: BeanList> BeanList for Box<L> {
    type Element = L::Element;
}

impl<L: BeanList> BeanList for Converted<L> {
    type Element = L::Element;
}

// -----------------------------------------------------------------------------
// FieldDescriptor

/// Metadata of one hydrated field.
///
/// Built by the derive through [`FieldDescriptor::new`] and the `with_*`
/// methods, then frozen inside a [`BeanInfo`].
///
/// # Examples
///
/// ```
/// use bean_engine::{Bean, derive::Bean};
///
/// #[derive(Bean, Default)]
/// struct Foo {
///     #[bean(alias = "userId")]
///     user: u64,
/// }
///
/// let field = Foo::bean_info().field_at(0).unwrap();
/// assert_eq!(field.name(), "user");
/// assert_eq!(field.alias(), Some("userId"));
/// assert_eq!(field.canonical_key(), "user_id");
/// assert!(field.type_is::<u64>());
/// ```
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    alias: Option<&'static str>,
    canonical_key: Box<str>,
    ty_id: TypeId,
    type_path: &'static str,
    field_type: FieldType,
    list_element: Option<fn() -> &'static BeanInfo>,
    union_discriminator: Option<&'static str>,
    converter: Option<ConverterRef>,
    mock: Option<MockSpec>,
}

impl FieldDescriptor {
    /// Creates a descriptor for the field `name` of type `T`.
    pub fn new<T: FromValue + Any>(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            canonical_key: canonical_key(name).into_boxed_str(),
            ty_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            field_type: T::field_type(),
            list_element: None,
            union_discriminator: None,
            converter: None,
            mock: None,
        }
    }

    /// Sets the external key. The canonical key follows the alias.
    pub fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self.canonical_key = canonical_key(alias).into_boxed_str();
        self
    }

    /// Declares the element bean `E` of a list field of type `L`.
    #[inline]
    pub fn with_list<L, E>(mut self) -> Self
    where
        L: BeanList<Element = E>,
        E: Bean,
    {
        self.list_element = Some(E::bean_info);
        self
    }

    /// Declares the sibling field whose value selects the union variant.
    #[inline]
    pub fn with_union(mut self, discriminator: &'static str) -> Self {
        self.union_discriminator = Some(discriminator);
        self
    }

    #[inline]
    pub fn with_converter(mut self, converter: ConverterRef) -> Self {
        self.converter = Some(converter);
        self
    }

    #[inline]
    pub fn with_mock(mut self, mock: MockSpec) -> Self {
        self.mock = Some(mock);
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Lower snake_case of the alias, or of the name.
    #[inline]
    pub fn canonical_key(&self) -> &str {
        &self.canonical_key
    }

    /// The key used for [`KeyStyle::Declared`](crate::KeyStyle::Declared) output.
    #[inline]
    pub fn declared_key(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }

    /// Input lookup keys in precedence order: alias, name, canonical key.
    ///
    /// Repeated keys are yielded once.
    pub fn lookup_keys(&self) -> impl Iterator<Item = &str> {
        let alias: Option<&str> = self.alias;
        let name: Option<&str> = Some(self.name).filter(|n| Some(*n) != alias);
        let canonical = Some(&*self.canonical_key)
            .filter(|c| Some(*c) != alias && *c != self.name);
        alias.into_iter().chain(name).chain(canonical)
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Rust type name of the field.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Element bean of a list field, declared or inferred from the type.
    pub fn list_element(&self) -> Option<&'static BeanInfo> {
        match (self.list_element, self.field_type) {
            (Some(f), _) | (None, FieldType::List(f)) => Some(f()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        self.list_element.is_some() || matches!(self.field_type, FieldType::List(_))
    }

    #[inline]
    pub const fn union_discriminator(&self) -> Option<&'static str> {
        self.union_discriminator
    }

    #[inline]
    pub const fn converter(&self) -> Option<&ConverterRef> {
        self.converter.as_ref()
    }

    #[inline]
    pub const fn mock(&self) -> Option<&MockSpec> {
        self.mock.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldDescriptor;

    #[test]
    fn lookup_key_order() {
        let plain = FieldDescriptor::new::<i32>("username");
        assert_eq!(plain.lookup_keys().collect::<Vec<_>>(), ["username"]);

        let camel = FieldDescriptor::new::<i32>("userId");
        assert_eq!(camel.lookup_keys().collect::<Vec<_>>(), ["userId", "user_id"]);

        let aliased = FieldDescriptor::new::<i32>("login_ip").with_alias("latestLoginIp");
        assert_eq!(
            aliased.lookup_keys().collect::<Vec<_>>(),
            ["latestLoginIp", "login_ip", "latest_login_ip"]
        );
        assert_eq!(aliased.declared_key(), "latestLoginIp");
    }
}
