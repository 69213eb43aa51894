use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::common::reduce_u64;
use crate::key::Key;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault};

/// Hasher backed by the standard library's [`std::hash::Hash`] machinery.
///
/// Uses [`DefaultHasher`] with fixed keys instead of a randomized [`std::hash::RandomState`],
/// so addresses are reproducible. Accepts every key kind, and numerically equal integers and
/// floats (`1` and `1.0`) land in the same bucket.
#[derive(Debug, Default, Clone)]
pub struct NativeHasher {
    build: BuildHasherDefault<DefaultHasher>,
}

impl Hasher for NativeHasher {
    const NAME: &'static str = "native";

    #[inline]
    fn hash(&self, key: &Key, num_buckets: usize) -> Result<usize, BucketsError> {
        Ok(reduce_u64(self.build.hash_one(key), num_buckets))
    }
}
