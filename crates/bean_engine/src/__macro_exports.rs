//! Items referenced by generated code. Not public API.

pub use serde_json;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Bean;
    use crate::registry::BeanRegistry;

    /// Registration function submitted by `#[bean(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut BeanRegistry));

    inventory::collect!(__AutoRegisterFunc);

    #[inline]
    pub fn __register<T: Bean>(registry: &mut BeanRegistry) {
        registry.register::<T>();
    }

    pub fn __register_types(registry: &mut BeanRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
