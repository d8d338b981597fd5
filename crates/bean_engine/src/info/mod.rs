//! Static descriptors of bean types.
//!
//! ## Menu
//!
//! - [`BeanInfo`]: the ordered field descriptors of a bean.
//! - [`FieldDescriptor`]: one field: keys, shape, converter, union and mock data.
//! - [`FieldType`]: scalar, nested bean, bean list or union.
//! - [`UnionInfo`] and [`UnionVariant`]: the tag table of a bean union.
//! - [`MockSpec`], [`MockType`] and [`MockEnum`]: documentation sample data.
//!
//! Infos are built by the derive on first access and cached, see
//! [`impls`](crate::impls) for the cells.

// -----------------------------------------------------------------------------
// Modules

mod bean_info;
mod field_info;
mod mock;
mod union_info;

// -----------------------------------------------------------------------------
// Exports

pub use bean_info::BeanInfo;
pub use field_info::{BeanList, FieldDescriptor, FieldType};
pub use mock::{MockEnum, MockSpec, MockType};
pub use union_info::{UnionInfo, UnionVariant};
