//! Code generation, one module per generated item.

// -----------------------------------------------------------------------------
// Modules

mod accessors;
mod auto_register;
mod field_descriptor;
mod partial_eq;
mod trait_bean;
mod trait_union;
mod trait_value;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use accessors::impl_accessors;
pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use partial_eq::impl_partial_eq;
pub(crate) use trait_bean::impl_trait_bean;
pub(crate) use trait_union::impl_trait_union;
pub(crate) use trait_value::impl_bean_value;
