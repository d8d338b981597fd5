use core::any::Any;

use crate::info::BeanInfo;
use crate::value::{KeyStyle, RawMap};
use crate::Bean;

/// Object-safe view of a bean, as returned by the registry.
///
/// ```
/// use bean_engine::{KeyStyle, derive::Bean, registry::BeanRegistry};
/// use serde_json::json;
///
/// #[derive(Bean, Default)]
/// struct Tag { label: String }
///
/// let mut registry = BeanRegistry::empty();
/// registry.register::<Tag>();
///
/// let input = json!({ "label": "rust" });
/// let bean = registry.hydrate("Tag", input.as_object().unwrap()).unwrap();
/// assert_eq!(bean.to_json(), r#"{"label":"rust"}"#);
///
/// let tag = bean.downcast::<Tag>().ok().unwrap();
/// assert_eq!(tag.label, "rust");
/// ```
pub trait DynBean: Any {
    fn bean_info(&self) -> &'static BeanInfo;

    fn to_plain_map(&self, style: KeyStyle) -> RawMap;

    fn to_json(&self) -> String;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Bean> DynBean for T {
    #[inline]
    fn bean_info(&self) -> &'static BeanInfo {
        T::bean_info()
    }

    #[inline]
    fn to_plain_map(&self, style: KeyStyle) -> RawMap {
        Bean::to_plain_map(self, style)
    }

    #[inline]
    fn to_json(&self) -> String {
        Bean::to_json(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn DynBean {
    #[inline]
    pub fn is<T: Bean>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Bean>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<T: Bean>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Takes the concrete bean back, or returns `self` on a type mismatch.
    pub fn downcast<T: Bean>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if self.is::<T>() {
            // Checked above.
            self.into_any().downcast().map_err(|_| unreachable!())
        } else {
            Err(self)
        }
    }
}
