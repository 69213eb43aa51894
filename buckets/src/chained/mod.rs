//! Fixed-capacity hash table resolving collisions by chaining.
mod core;
pub use self::core::*;
mod ctors;
mod hash_map;
