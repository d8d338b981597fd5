#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use bean_engine as engine;

pub use bean_engine::derive::{Bean, BeanUnion};
pub use bean_engine::{Bean, BeanError, KeyStyle};
