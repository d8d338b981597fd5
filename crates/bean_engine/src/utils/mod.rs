//! Small helpers shared by the engine.

// -----------------------------------------------------------------------------
// Modules

mod case;
mod hash;

// -----------------------------------------------------------------------------
// Exports

pub use case::{canonical_key, getter_target, setter_target};
pub use hash::{FixedHashState, HashMap, TypeIdMap};
