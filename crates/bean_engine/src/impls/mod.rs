//! Built-in [`FromValue`](crate::FromValue) and [`IntoValue`](crate::IntoValue)
//! implementations, and the static cells used by generated code.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod containers;
mod native;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericBeanInfoCell, GenericInfoCell, GenericUnionInfoCell};
pub use cell::{NonGenericBeanInfoCell, NonGenericInfoCell, NonGenericUnionInfoCell};
