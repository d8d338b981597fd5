//! Lookup of bean types by name, for callers that only know a type path.
//!
//! ## Menu
//!
//! - [`BeanMeta`]: descriptors and type-erased entry points of one bean type.
//! - [`DynBean`]: an object-safe view of a hydrated bean.
//! - [`BeanRegistry`]: [`BeanMeta`]s indexed by [`TypeId`], type path and type name.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, types marked `#[bean(auto_register)]`
//! are collected at link time with the [`inventory`] crate and picked up by
//! [`BeanRegistry::auto_register`]. Generic types are never collected.
//!
//! [`TypeId`]: core::any::TypeId
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod bean_meta;
mod dyn_bean;
mod bean_registry;

// -----------------------------------------------------------------------------
// Exports

pub use bean_meta::BeanMeta;
pub use bean_registry::BeanRegistry;
pub use dyn_bean::DynBean;
