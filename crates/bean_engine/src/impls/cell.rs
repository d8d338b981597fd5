//! Static storage for bean and union infos.
//!
//! ## Non-generic types
//!
//! [`NonGenericBeanInfoCell`] wraps a [`OnceLock`]: the info is built once on
//! first access and shared afterwards.
//!
//! ## Generic types
//!
//! A `static` inside a generic function is shared by every instantiation, so
//! [`GenericBeanInfoCell`] keeps one leaked info per [`TypeId`] in a
//! [`RwLock`]-guarded map.
//!
//! ## Examples
//!
//! ```
//! use bean_engine::Bean;
//! use bean_engine::info::BeanInfo;
//!
//! #[derive(bean_engine::derive::Bean, Default)]
//! struct Page<T: Bean> {
//!     items: Vec<T>,
//!     total: u64,
//! }
//!
//! #[derive(bean_engine::derive::Bean, Default)]
//! struct Book {
//!     name: String,
//! }
//!
//! let a: &'static BeanInfo = <Page<Book>>::bean_info();
//! let b: &'static BeanInfo = <Page<Book>>::bean_info();
//! assert!(core::ptr::eq(a, b));
//! assert!(a.type_name().starts_with("Page<"));
//! ```

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::{BeanInfo, UnionInfo};
use crate::utils::TypeIdMap;

mod sealed {
    use crate::info::{BeanInfo, UnionInfo};

    pub trait InfoProperty: Send + Sync + 'static {}

    impl InfoProperty for BeanInfo {}
    impl InfoProperty for UnionInfo {}
}

use sealed::InfoProperty;

// -----------------------------------------------------------------------------
// NonGenericInfoCell

/// Static storage of the info of a non-generic type.
pub struct NonGenericInfoCell<T: InfoProperty>(OnceLock<T>);

/// Static storage of the [`BeanInfo`] of a non-generic bean.
///
/// ```
/// use bean_engine::impls::NonGenericBeanInfoCell;
/// use bean_engine::info::{BeanInfo, FieldDescriptor};
///
/// struct Manual;
///
/// fn info() -> &'static BeanInfo {
///     static CELL: NonGenericBeanInfoCell = NonGenericBeanInfoCell::new();
///     CELL.get_or_init(|| BeanInfo::new::<Manual>(vec![FieldDescriptor::new::<u32>("id")], &[]))
/// }
///
/// assert!(core::ptr::eq(info(), info()));
/// assert_eq!(info().type_name(), "Manual");
/// ```
pub type NonGenericBeanInfoCell = NonGenericInfoCell<BeanInfo>;

/// Static storage of the [`UnionInfo`] of a non-generic union.
pub type NonGenericUnionInfoCell = NonGenericInfoCell<UnionInfo>;

impl<T: InfoProperty> NonGenericInfoCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericInfoCell

/// Static storage of infos of a generic type, one per instantiation.
pub struct GenericInfoCell<T: InfoProperty>(RwLock<TypeIdMap<&'static T>>);

/// Static storage of the [`BeanInfo`]s of a generic bean.
pub type GenericBeanInfoCell = GenericInfoCell<BeanInfo>;

/// Static storage of the [`UnionInfo`]s of a generic union.
pub type GenericUnionInfoCell = GenericInfoCell<UnionInfo>;

impl<T: InfoProperty> GenericInfoCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info of `G`, building it with `f` if absent.
    ///
    /// `f` runs without holding the lock, so it may look up other infos.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // A racing builder may have inserted first; its value wins.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::GenericBeanInfoCell;
    use crate::info::{BeanInfo, FieldDescriptor};

    struct A;
    struct B;

    static CELL: GenericBeanInfoCell = GenericBeanInfoCell::new();

    fn info_of<T: 'static>() -> &'static BeanInfo {
        CELL.get_or_insert::<T>(|| BeanInfo::new::<T>(vec![FieldDescriptor::new::<u8>("x")], &[]))
    }

    #[test]
    fn one_info_per_type() {
        assert!(core::ptr::eq(info_of::<A>(), info_of::<A>()));
        assert!(!core::ptr::eq(info_of::<A>(), info_of::<B>()));
        assert_eq!(info_of::<B>().type_name(), "B");
    }
}
