//! Checks that apply to every [`Hasher`].
use buckets_core::core::Hasher;
use buckets_core::key::Key;

/// Asserts that every key hashes into `[0, num_buckets)` and that hashing is deterministic.
///
/// # Panics
///
/// - If the hasher rejects any of the `keys`.
pub fn test_range<H: Hasher>(hasher: &H, keys: &[Key], num_buckets: usize) {
    for key in keys {
        let address = hasher
            .hash(key, num_buckets)
            .unwrap_or_else(|err| panic!("Key: {}, error: {}", key, err));
        assert!(
            address < num_buckets,
            "Key: {}, address: {}, num_buckets: {}",
            key,
            address,
            num_buckets
        );
        assert_eq!(hasher.hash(key, num_buckets), Ok(address), "Key: {}", key);
    }
}
