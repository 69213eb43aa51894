use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::common::{invalid_key_type, reduce_be_bytes};
use crate::key::Key;
use sha2::{Digest, Sha256};

/// Hasher that reduces the SHA-256 digest of the UTF-8 bytes of a text key.
///
/// Only text keys are supported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    const NAME: &'static str = "sha256";

    fn hash(&self, key: &Key, num_buckets: usize) -> Result<usize, BucketsError> {
        let text = key.as_str().ok_or_else(|| invalid_key_type::<Self>(key))?;
        Ok(reduce_be_bytes(&Sha256::digest(text.as_bytes()), num_buckets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_addresses() {
        let key = Key::from("apple");
        for (num_buckets, address) in [(7, 1), (10, 7), (101, 27), (1000, 227)] {
            assert_eq!(Sha256Hasher.hash(&key, num_buckets), Ok(address));
        }
    }

    #[test]
    fn test_sha256_rejects_non_text() {
        for key in [Key::from(1), Key::from(1.5), Key::from(&b"a"[..])] {
            assert!(
                matches!(
                    Sha256Hasher.hash(&key, 10),
                    Err(BucketsError::InvalidKeyType { hasher: "sha256", .. })
                ),
                "Key: {}",
                key
            );
        }
    }
}
