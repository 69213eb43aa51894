//! Fixed-capacity hash tables with pluggable hashing strategies.
//!
//! - [`chained::ChainedTable`] resolves collisions by chaining entries in a list.
//! - [`nested::NestedTable`] resolves collisions with a nested hash table per bucket.
//! - [`tree::TreeMap`] adapts an ordered tree to the same map surface.
//!
//! Addresses are computed by a [`core::Hasher`] from [`hashing::hashers`].
pub use buckets_core::{core, error, key};
pub mod chained;
pub mod hashing;
pub mod nested;
pub mod tree;
mod utils;
