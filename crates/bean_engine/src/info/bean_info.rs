use core::any::{Any, TypeId};

use crate::ConfigError;
use crate::info::{FieldDescriptor, FieldType};
use crate::utils::HashMap;

/// The ordered field descriptors of a bean type.
///
/// Built once per type and cached for the process lifetime. Consistency
/// problems found while building are stored and returned by
/// [`BeanInfo::check`] on every use.
///
/// # Examples
///
/// ```
/// use bean_engine::{Bean, derive::Bean};
///
/// #[derive(Bean, Default)]
/// #[bean(skip = [pivot])]
/// struct Sample {
///     username: String,
///     #[bean(alias = "latestLoginIp")]
///     login_ip: String,
///     pivot: Vec<u8>,
/// }
///
/// let info = Sample::describe().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("login_ip"), Some(1));
/// assert_eq!(info.resolve("latest_login_ip"), Some(1));
/// assert!(info.is_excluded("pivot"));
/// ```
#[derive(Debug)]
pub struct BeanInfo {
    type_path: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    fields: Box<[FieldDescriptor]>,
    excluded: Box<[&'static str]>,
    // Every lookup key of every field, to the field index.
    keys: HashMap<Box<str>, usize>,
    problem: Option<ConfigError>,
}

impl BeanInfo {
    /// Creates the info of `T`, in field order.
    ///
    /// `excluded` lists the field names left out of hydration and
    /// serialization.
    pub fn new<T: Any>(fields: Vec<FieldDescriptor>, excluded: &[&'static str]) -> Self {
        let type_path = core::any::type_name::<T>();
        let mut info = Self {
            type_path,
            type_name: short_type_name(type_path),
            type_id: TypeId::of::<T>(),
            fields: fields.into_boxed_slice(),
            excluded: excluded.into(),
            keys: HashMap::default(),
            problem: None,
        };
        info.problem = info.build_keys().err();
        info
    }

    fn build_keys(&mut self) -> Result<(), ConfigError> {
        let bean = self.type_name;

        // Names first, so a name always wins over another field's alias.
        for (index, field) in self.fields.iter().enumerate() {
            if self.keys.insert(field.name().into(), index).is_some() {
                return Err(ConfigError::DuplicateField {
                    bean,
                    field: field.name(),
                });
            }
        }

        for (index, field) in self.fields.iter().enumerate() {
            for key in field.lookup_keys() {
                let owner = *self.keys.entry(key.into()).or_insert(index);
                if owner != index {
                    return Err(ConfigError::AmbiguousKey {
                        bean,
                        key: key.to_owned(),
                        field: field.name(),
                        other: self.fields[owner].name(),
                    });
                }
            }
        }

        for field in self.fields.iter() {
            self.check_union(field)?;
        }
        Ok(())
    }

    fn check_union(&self, field: &FieldDescriptor) -> Result<(), ConfigError> {
        let bean = self.type_name;
        let is_union = matches!(field.field_type(), FieldType::Union(_));

        match field.union_discriminator() {
            None if is_union => Err(ConfigError::UnionShape {
                bean,
                field: field.name(),
            }),
            None => Ok(()),
            Some(_) if field.is_list() => Err(ConfigError::UnionList {
                bean,
                field: field.name(),
            }),
            Some(_) if !is_union => Err(ConfigError::UnionShape {
                bean,
                field: field.name(),
            }),
            Some(disc) if disc == field.name() => Err(ConfigError::SelfDiscriminator {
                bean,
                field: field.name(),
            }),
            Some(disc) if self.index_of(disc).is_none() && !self.is_excluded(disc) => {
                Err(ConfigError::UnknownDiscriminator {
                    bean,
                    field: field.name(),
                    discriminator: disc,
                })
            }
            Some(_) => Ok(()),
        }
    }

    /// Returns the configuration problem of this type, if any.
    ///
    /// Union fields also report the problems of their union type.
    pub fn check(&self) -> Result<(), ConfigError> {
        if let Some(problem) = &self.problem {
            return Err(problem.clone());
        }
        self.fields
            .iter()
            .filter_map(|field| field.field_type().union_info())
            .try_for_each(|union| union.check())
    }

    /// Full type path, from [`core::any::type_name`].
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Type path without the module prefix.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the descriptor of the field declared as `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(self.index_of(name)?)
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Returns the index of the field declared as `name`.
    ///
    /// This is O(N) complexity. See [`BeanInfo::resolve`] for key lookup.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Returns the index of the field reachable under `key`: its declared
    /// name, its alias or its canonical key.
    #[inline]
    pub fn resolve(&self, key: &str) -> Option<usize> {
        self.keys.get(key).copied()
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Field names excluded from hydration and serialization.
    #[inline]
    pub fn excluded(&self) -> &[&'static str] {
        &self.excluded
    }

    #[inline]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|excluded| *excluded == name)
    }
}

/// `a::b::Foo<c::Bar>` -> `Foo<c::Bar>`.
fn short_type_name(path: &'static str) -> &'static str {
    let end = path.find('<').unwrap_or(path.len());
    match path[..end].rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::{BeanInfo, short_type_name};
    use crate::ConfigError;
    use crate::info::FieldDescriptor;

    struct Marker;

    #[test]
    fn short_names() {
        assert_eq!(short_type_name("a::b::Foo"), "Foo");
        assert_eq!(short_type_name("a::Foo<b::Bar>"), "Foo<b::Bar>");
        assert_eq!(short_type_name("u8"), "u8");
    }

    #[test]
    fn ambiguous_alias() {
        let info = BeanInfo::new::<Marker>(
            vec![
                FieldDescriptor::new::<String>("name"),
                FieldDescriptor::new::<String>("title").with_alias("name"),
            ],
            &[],
        );
        assert_eq!(
            info.check(),
            Err(ConfigError::AmbiguousKey {
                bean: "Marker",
                key: "name".into(),
                field: "title",
                other: "name",
            })
        );
        // Stable across calls.
        assert_eq!(info.check(), info.check());
    }

    #[test]
    fn duplicate_field() {
        let info = BeanInfo::new::<Marker>(
            vec![
                FieldDescriptor::new::<u8>("a"),
                FieldDescriptor::new::<u16>("a"),
            ],
            &[],
        );
        assert!(matches!(
            info.check(),
            Err(ConfigError::DuplicateField { field: "a", .. })
        ));
    }

    #[test]
    fn discriminator_on_scalar() {
        let info = BeanInfo::new::<Marker>(
            vec![
                FieldDescriptor::new::<String>("kind"),
                FieldDescriptor::new::<String>("settings").with_union("kind"),
            ],
            &[],
        );
        assert!(matches!(
            info.check(),
            Err(ConfigError::UnionShape { field: "settings", .. })
        ));
    }

    #[test]
    fn keys_resolve() {
        let info = BeanInfo::new::<Marker>(
            vec![
                FieldDescriptor::new::<u64>("userId"),
                FieldDescriptor::new::<String>("ip").with_alias("lastIp"),
            ],
            &["pivot"],
        );
        assert!(info.check().is_ok());
        assert_eq!(info.resolve("userId"), Some(0));
        assert_eq!(info.resolve("user_id"), Some(0));
        assert_eq!(info.resolve("lastIp"), Some(1));
        assert_eq!(info.resolve("last_ip"), Some(1));
        assert_eq!(info.resolve("ip"), Some(1));
        assert_eq!(info.resolve("pivot"), None);
        assert_eq!(info.field("ip").map(|f| f.alias()), Some(Some("lastIp")));
    }
}
