use core::any::{Any, TypeId};

use crate::ConfigError;
use crate::info::BeanInfo;
use crate::utils::HashMap;

// -----------------------------------------------------------------------------
// UnionVariant

/// One concrete bean type of a union, selected by `tag`.
#[derive(Clone, Debug)]
pub struct UnionVariant {
    tag: &'static str,
    name: &'static str,
    bean_info: fn() -> &'static BeanInfo,
}

impl UnionVariant {
    #[inline]
    pub const fn new(tag: &'static str, name: &'static str, bean_info: fn() -> &'static BeanInfo) -> Self {
        Self {
            tag,
            name,
            bean_info,
        }
    }

    /// The discriminator value selecting this variant.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// The enum variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn bean_info(&self) -> &'static BeanInfo {
        (self.bean_info)()
    }
}

// -----------------------------------------------------------------------------
// UnionInfo

/// The discriminator table of a bean union.
///
/// # Examples
///
/// ```
/// use bean_engine::BeanUnion as _;
/// use bean_engine::derive::Bean;
///
/// #[derive(Bean, Default)]
/// struct Text { max_length: u32 }
///
/// #[derive(Bean, Default)]
/// struct Number { min: i64, max: i64 }
///
/// #[derive(bean_engine::derive::BeanUnion)]
/// enum Settings {
///     #[bean(tag = "text")]
///     Text(Text),
///     Number(Number),
/// }
///
/// let info = Settings::union_info();
/// assert_eq!(info.variant_of("text"), Some(0));
/// assert_eq!(info.variant_of("number"), Some(1));
/// assert_eq!(info.variant_at(1).unwrap().bean_info().type_name(), "Number");
/// ```
#[derive(Debug)]
pub struct UnionInfo {
    type_path: &'static str,
    type_id: TypeId,
    variants: Box<[UnionVariant]>,
    tags: HashMap<&'static str, usize>,
    problem: Option<ConfigError>,
}

impl UnionInfo {
    pub fn new<T: Any>(variants: Vec<UnionVariant>) -> Self {
        let type_path = core::any::type_name::<T>();
        let mut tags = HashMap::default();
        let mut problem = None;

        for (index, variant) in variants.iter().enumerate() {
            if tags.insert(variant.tag(), index).is_some() && problem.is_none() {
                problem = Some(ConfigError::DuplicateTag {
                    union: type_path,
                    tag: variant.tag(),
                });
            }
        }

        Self {
            type_path,
            type_id: TypeId::of::<T>(),
            variants: variants.into_boxed_slice(),
            tags,
            problem,
        }
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        match &self.problem {
            Some(problem) => Err(problem.clone()),
            None => Ok(()),
        }
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the index of the variant selected by `tag`.
    #[inline]
    pub fn variant_of(&self, tag: &str) -> Option<usize> {
        self.tags.get(tag).copied()
    }

    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&UnionVariant> {
        self.variants.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &UnionVariant> {
        self.variants.iter()
    }

    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{UnionInfo, UnionVariant};
    use crate::info::BeanInfo;
    use crate::{Bean, ConfigError};

    #[derive(crate::derive::Bean, Default)]
    struct Empty {}

    fn empty() -> &'static BeanInfo {
        Empty::bean_info()
    }

    #[test]
    fn duplicate_tag() {
        let info = UnionInfo::new::<Empty>(vec![
            UnionVariant::new("a", "A", empty),
            UnionVariant::new("a", "B", empty),
        ]);
        assert!(matches!(
            info.check(),
            Err(ConfigError::DuplicateTag { tag: "a", .. })
        ));
        assert_eq!(info.variant_len(), 2);
    }
}
