//! Field access by name.
//!
//! [`BeanAccess`] is implemented for every [`Bean`]. Names resolve against
//! the descriptor table: declared name, alias, canonical key, then the
//! snake_case projection of the name, so `userId` finds `user_id`. Values
//! are read and written as their Rust type, without the conversion
//! pipeline.
//!
//! `#[bean(accessors)]` generates the same contract as methods.

use core::any::{Any, type_name};

use crate::utils::{canonical_key, getter_target, setter_target};
use crate::{Bean, BeanError};

/// Dynamic getters and setters of a [`Bean`].
///
/// # Examples
///
/// ```
/// use bean_engine::{BeanError, access::BeanAccess, derive::Bean};
///
/// #[derive(Bean, Default)]
/// #[bean(rename_all = "camelCase")]
/// struct User {
///     user_id: u64,
///     name: String,
/// }
///
/// let mut user = User::default();
/// user.set("userId", 7_u64).unwrap().set("name", String::from("bob")).unwrap();
///
/// assert_eq!(user.invoke_get::<u64>("getUserId").unwrap(), &7);
/// assert_eq!(user.get::<String>("name").unwrap(), "bob");
///
/// assert!(matches!(user.get::<u64>("age"), Err(BeanError::PropertyNotFound { .. })));
/// assert!(matches!(user.set("name", 3_i32), Err(BeanError::FieldTypeMismatch { .. })));
/// ```
pub trait BeanAccess: Bean {
    /// Returns the field reachable under `name`.
    fn get<V: Any>(&self, name: &str) -> Result<&V, BeanError> {
        let index = field_index::<Self>(name)?;
        let field = self
            .field_any(index)
            .ok_or_else(|| not_found::<Self>(name))?;
        field
            .downcast_ref::<V>()
            .ok_or_else(|| type_mismatch::<Self, V>(index))
    }

    /// Returns the field reachable under `name`, mutably.
    fn get_mut<V: Any>(&mut self, name: &str) -> Result<&mut V, BeanError> {
        let index = field_index::<Self>(name)?;
        let field = self
            .field_any_mut(index)
            .ok_or_else(|| not_found::<Self>(name))?;
        field
            .downcast_mut::<V>()
            .ok_or_else(|| type_mismatch::<Self, V>(index))
    }

    /// Assigns the field reachable under `name`.
    ///
    /// Setting an excluded field does nothing.
    fn set<V: Any>(&mut self, name: &str, value: V) -> Result<&mut Self, BeanError> {
        let info = Self::describe()?;
        if info.is_excluded(name) || info.is_excluded(&canonical_key(name)) {
            return Ok(self);
        }
        *self.get_mut::<V>(name)? = value;
        Ok(self)
    }

    /// Getter by method name: `getUserId` reads `userId`.
    fn invoke_get<V: Any>(&self, method: &str) -> Result<&V, BeanError> {
        let name = getter_target(method).ok_or_else(|| not_found::<Self>(method))?;
        self.get(&name)
    }

    /// Setter by method name: `setUserId` writes `userId`.
    fn invoke_set<V: Any>(&mut self, method: &str, value: V) -> Result<&mut Self, BeanError> {
        let name = setter_target(method).ok_or_else(|| not_found::<Self>(method))?;
        self.set(&name, value)
    }
}

impl<T: Bean> BeanAccess for T {}

fn field_index<T: Bean>(name: &str) -> Result<usize, BeanError> {
    let info = T::describe()?;
    info.index_of(name)
        .or_else(|| info.resolve(name))
        .or_else(|| info.resolve(&canonical_key(name)))
        .ok_or_else(|| not_found::<T>(name))
}

#[cold]
fn not_found<T: Bean>(name: &str) -> BeanError {
    BeanError::PropertyNotFound {
        bean: T::bean_info().type_name(),
        field: name.to_owned(),
    }
}

#[cold]
fn type_mismatch<T: Bean, V: Any>(index: usize) -> BeanError {
    let info = T::bean_info();
    let (field, expect) = info
        .field_at(index)
        .map_or(("", ""), |f| (f.name(), f.type_path()));
    BeanError::FieldTypeMismatch {
        bean: info.type_name(),
        field,
        expect,
        actual: type_name::<V>(),
    }
}

#[cfg(test)]
mod tests {
    use super::BeanAccess;
    use crate::BeanError;

    #[derive(crate::derive::Bean, Default)]
    #[bean(accessors, rename_all = "camelCase")]
    struct Profile {
        user_id: u64,
        r#type: String,
        #[bean(skip)]
        cache: Vec<u8>,
    }

    #[test]
    fn generated_accessors() {
        let mut profile = Profile::default();
        profile.set_user_id(3).set_type(String::from("admin"));

        assert_eq!(*profile.user_id(), 3);
        assert_eq!(profile.r#type(), "admin");
        assert!(profile.cache.is_empty());
    }

    #[test]
    fn by_name() {
        let mut profile = Profile::default();
        profile.invoke_set("setUserId", 9_u64).unwrap();
        *profile.get_mut::<String>("type").unwrap() = String::from("guest");

        assert_eq!(profile.user_id, 9);
        assert_eq!(profile.invoke_get::<String>("getType").unwrap(), "guest");
        assert!(matches!(
            profile.invoke_get::<u64>("fetchUserId"),
            Err(BeanError::PropertyNotFound { .. })
        ));

        // Excluded: accepted and ignored.
        profile.invoke_set("setCache", vec![1_u8]).unwrap();
        assert!(profile.cache.is_empty());
    }

    #[derive(crate::derive::Bean, Default)]
    struct Plain {
        user_id: u64,
        address_line1: String,
        #[bean(skip)]
        login_cache: Vec<u8>,
    }

    #[test]
    fn camel_method_names_on_snake_fields() {
        let mut plain = Plain {
            user_id: 5,
            ..Plain::default()
        };
        assert_eq!(plain.invoke_get::<u64>("getUserId").unwrap(), &5);

        plain
            .invoke_set("setAddressLine1", String::from("1 Main St"))
            .unwrap()
            .invoke_set("setUserId", 6_u64)
            .unwrap();
        assert_eq!(plain.address_line1, "1 Main St");
        assert_eq!(plain.get::<u64>("user_id").unwrap(), &6);

        plain.invoke_set("setLoginCache", vec![1_u8]).unwrap();
        assert!(plain.login_cache.is_empty());
    }
}
