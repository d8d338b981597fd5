use core::any::TypeId;

use hashbrown::HashSet;

use crate::registry::{BeanMeta, DynBean};
use crate::utils::{FixedHashState, HashMap, TypeIdMap};
use crate::value::RawMap;
use crate::{Bean, BeanError};

/// [`BeanMeta`]s indexed by [`TypeId`], full type path and short type name.
///
/// A short name shared by two registered types is ambiguous and only
/// reachable through the full path.
///
/// # Examples
///
/// ```
/// use bean_engine::{BeanError, derive::Bean, registry::BeanRegistry};
/// use serde_json::json;
///
/// #[derive(Bean, Default)]
/// struct Order { id: u64 }
///
/// let mut registry = BeanRegistry::empty();
/// assert!(registry.register::<Order>());
/// assert!(!registry.register::<Order>());
///
/// let meta = registry.get_with_type_name("Order").unwrap();
/// assert!(registry.get_with_type_path(meta.type_path()).is_some());
///
/// let input = json!({ "id": 12 });
/// let order = registry.hydrate("Order", input.as_object().unwrap()).unwrap();
/// assert_eq!(order.downcast_ref::<Order>().unwrap().id, 12);
///
/// let err = registry.hydrate("Missing", input.as_object().unwrap()).err().unwrap();
/// assert!(matches!(err, BeanError::UnknownType(_)));
/// ```
pub struct BeanRegistry {
    metas: TypeIdMap<BeanMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str, FixedHashState>,
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    auto_registered: bool,
}

impl Default for BeanRegistry {
    /// See [`BeanRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl BeanRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            metas: TypeIdMap::new(),
            type_path_to_id: hashbrown::HashMap::with_hasher(FixedHashState),
            type_name_to_id: hashbrown::HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Creates a registry holding every auto-registered bean.
    ///
    /// Same as [`BeanRegistry::empty`] without the `auto_register` feature.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.auto_register();
        registry
    }

    // The type must not be registered yet.
    fn add_indices(&mut self, meta: &BeanMeta) {
        let type_name = meta.type_name();
        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.remove(type_name).is_some() {
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, meta.type_id());
            }
        }
        self.type_path_to_id.insert(meta.type_path(), meta.type_id());
    }

    /// Registers `T`; returns `false` if it was already registered.
    pub fn register<T: Bean>(&mut self) -> bool {
        let type_id = TypeId::of::<T>();
        if self.metas.contains(&type_id) {
            return false;
        }
        let meta = BeanMeta::of::<T>();
        self.add_indices(&meta);
        self.metas.try_insert(type_id, || meta)
    }

    /// Registers every non-generic type marked `#[bean(auto_register)]`.
    ///
    /// Repeated calls do nothing. Returns `false` without the
    /// `auto_register` feature.
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::__register_types(self);
                self.auto_registered = true;
                log::debug!("auto-registered {} beans", self.len());
            }
            true
        }

        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.metas.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&BeanMeta> {
        self.metas.get(&type_id)
    }

    /// Returns the meta of the type with the full path `type_path`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&BeanMeta> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Returns the meta of the type with the short name `type_name`.
    ///
    /// `None` when the name is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&BeanMeta> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Hydrates a bean of the type named `name`: a full path, or an
    /// unambiguous short name.
    pub fn hydrate(&self, name: &str, input: &RawMap) -> Result<Box<dyn DynBean>, BeanError> {
        self.get_with_type_path(name)
            .or_else(|| self.get_with_type_name(name))
            .ok_or_else(|| BeanError::UnknownType(name.to_owned()))?
            .hydrate(input)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &BeanMeta> {
        self.metas.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.metas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::BeanRegistry;

    mod a {
        #[derive(crate::derive::Bean, Default)]
        pub struct Item {
            pub id: u32,
        }
    }

    mod b {
        #[derive(crate::derive::Bean, Default)]
        pub struct Item {
            pub name: String,
        }
    }

    #[test]
    fn ambiguous_short_names() {
        let mut registry = BeanRegistry::empty();
        registry.register::<a::Item>();
        assert!(registry.get_with_type_name("Item").is_some());

        registry.register::<b::Item>();
        assert!(registry.is_ambiguous("Item"));
        assert!(registry.get_with_type_name("Item").is_none());
        assert!(
            registry
                .get_with_type_path(core::any::type_name::<b::Item>())
                .is_some()
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn hydrate_by_name() {
        let mut registry = BeanRegistry::empty();
        assert!(registry.register::<a::Item>());
        assert!(!registry.register::<a::Item>());

        let input = serde_json::json!({ "id": 4 });
        let input = input.as_object().unwrap();

        let bean = registry.hydrate("Item", input).unwrap();
        assert_eq!(bean.downcast_ref::<a::Item>().map(|item| item.id), Some(4));
        assert_eq!(bean.to_json(), r#"{"id":4}"#);

        let path = core::any::type_name::<a::Item>();
        assert!(registry.hydrate(path, input).unwrap().is::<a::Item>());

        assert!(matches!(
            registry.hydrate("Missing", input),
            Err(crate::BeanError::UnknownType(name)) if name == "Missing"
        ));
    }

    #[cfg(feature = "auto_register")]
    #[derive(crate::derive::Bean, Default)]
    #[bean(auto_register)]
    struct Marked {
        flag: bool,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_marked_beans() {
        let registry = BeanRegistry::new();
        assert!(registry.contains(core::any::TypeId::of::<Marked>()));
    }
}
