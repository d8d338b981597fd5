use core::any::TypeId;

use crate::info::BeanInfo;
use crate::registry::DynBean;
use crate::value::RawMap;
use crate::{Bean, BeanError, hydrate, mock};

/// Type-erased entry points of one bean type.
#[derive(Clone, Copy)]
pub struct BeanMeta {
    type_id: TypeId,
    bean_info: fn() -> &'static BeanInfo,
    hydrate: fn(&RawMap) -> Result<Box<dyn DynBean>, BeanError>,
    mock_data: fn() -> RawMap,
}

impl BeanMeta {
    /// Creates the meta of `T`.
    pub fn of<T: Bean>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            bean_info: T::bean_info,
            hydrate: hydrate_erased::<T>,
            mock_data: mock::mock_data::<T>,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn bean_info(&self) -> &'static BeanInfo {
        (self.bean_info)()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.bean_info().type_path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.bean_info().type_name()
    }

    /// Hydrates a new bean of this type.
    #[inline]
    pub fn hydrate(&self, input: &RawMap) -> Result<Box<dyn DynBean>, BeanError> {
        (self.hydrate)(input)
    }

    #[inline]
    pub fn mock_data(&self) -> RawMap {
        (self.mock_data)()
    }
}

fn hydrate_erased<T: Bean>(input: &RawMap) -> Result<Box<dyn DynBean>, BeanError> {
    let bean: T = hydrate::hydrate(input)?;
    Ok(Box::new(bean))
}

impl core::fmt::Debug for BeanMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BeanMeta")
            .field("type_path", &self.type_path())
            .finish_non_exhaustive()
    }
}
