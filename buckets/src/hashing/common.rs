//! Helpers shared by the hasher implementations.
use crate::core::Hasher;
use crate::error::BucketsError;
use crate::key::Key;

/// Reduces an unsigned integer given by its big-endian bytes modulo `num_buckets`.
///
/// Equivalent to interpreting the whole byte string (for example a digest) as one big integer
/// and taking its remainder, without materializing the big integer.
#[inline]
pub fn reduce_be_bytes(bytes: &[u8], num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);

    let modulus = num_buckets as u128;
    bytes
        .iter()
        .fold(0_u128, |acc, &byte| ((acc << 8) | byte as u128) % modulus) as usize
}

/// Reduces a 64-bit hash modulo `num_buckets`.
#[inline]
pub const fn reduce_u64(value: u64, num_buckets: usize) -> usize {
    debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);

    (value % num_buckets as u64) as usize
}

/// Builds the error returned when hasher `H` does not accept the kind of `key`.
#[inline]
pub fn invalid_key_type<H: Hasher>(key: &Key) -> BucketsError {
    BucketsError::InvalidKeyType {
        hasher: H::NAME,
        key_type: key.type_name(),
    }
}

/// Builds the error returned when hasher `H` can't encode the value of `key`.
#[inline]
pub fn key_out_of_range<H: Hasher>(key: &Key) -> BucketsError {
    BucketsError::KeyOutOfRange {
        hasher: H::NAME,
        key_type: key.type_name(),
    }
}
