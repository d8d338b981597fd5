//! Parsed forms of the deriving items.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod bean_meta;
mod bean_struct;
mod bean_union;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{ConverterAttr, FieldAttributes, MockAttr, TypeAttributes, recase};
pub(crate) use bean_meta::BeanMeta;
pub(crate) use bean_struct::{BeanField, BeanStruct};
pub(crate) use bean_union::BeanUnionEnum;
