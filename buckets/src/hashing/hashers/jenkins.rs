use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::common::{invalid_key_type, reduce_u64};
use crate::hashing::lookup3::hashlittle2;
use crate::key::Key;

/// Hasher based on Jenkins' [`lookup3`](crate::hashing::lookup3) over the UTF-8 bytes of a text
/// key.
///
/// Only text keys are supported. Both seeds default to `0`, which gives plain
/// `hashlittle(key, 0)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JenkinsHasher {
    initval: u32,
    initval2: u32,
}

impl JenkinsHasher {
    /// Create a new hasher with explicit primary and secondary seeds.
    pub const fn with_seeds(initval: u32, initval2: u32) -> Self {
        Self { initval, initval2 }
    }

    /// Create a new hasher splitting a 64-bit `seed` into the two 32-bit seeds (low half first).
    pub const fn from_seed(seed: u64) -> Self {
        Self::with_seeds(seed as u32, (seed >> 32) as u32)
    }

    /// Get the `(initval, initval2)` seeds.
    pub const fn seeds(&self) -> (u32, u32) {
        (self.initval, self.initval2)
    }

    /// Hash raw bytes, returning the primary and secondary 32-bit hashes.
    #[inline]
    pub const fn hash_bytes(&self, data: &[u8]) -> (u32, u32) {
        hashlittle2(data, self.initval, self.initval2)
    }
}

impl Hasher for JenkinsHasher {
    const NAME: &'static str = "jenkins";

    #[inline]
    fn hash(&self, key: &Key, num_buckets: usize) -> Result<usize, BucketsError> {
        let text = key.as_str().ok_or_else(|| invalid_key_type::<Self>(key))?;
        let (primary, _) = self.hash_bytes(text.as_bytes());
        Ok(reduce_u64(primary as u64, num_buckets))
    }
}
