//! Keyed map over an ordered (balanced search) tree.
//!
//! The tree itself is a collaborator behind [`OrderedTree`]; [`TreeMap`] only adapts it to the
//! same `add` / `get` / `keys` surface the hash tables have.
mod map;
pub use map::*;
mod ordered;
pub use ordered::*;
