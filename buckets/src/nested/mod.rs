//! Two-level hash table: every populated bucket is itself a hash table.
//!
//! Compared to [`crate::chained::ChainedTable`] a heavy collision at the top level spreads over
//! the buckets of a nested table instead of growing one long chain.
mod core;
pub use self::core::*;
mod ctors;
mod hash_map;
