//! Core trait declarations for the whole project.
use crate::error::BucketsError;
use crate::key::Key;
use std::fmt::Debug;

/// Strategy that turns a [`Key`] into a bucket address.
///
/// Tables own an instance of the strategy and call it for every insertion and lookup, so the
/// same key must always produce the same address for the same number of buckets.
pub trait Hasher: Default + Debug {
    /// Name of the strategy, used in error messages and logs.
    const NAME: &'static str;

    /// Hash the given `key` into the range `[0, num_buckets)`.
    ///
    /// # Errors
    ///
    /// - [`BucketsError::InvalidKeyType`] if the strategy does not accept keys of this kind.
    /// - [`BucketsError::KeyOutOfRange`] if the value has no encoding for the strategy.
    ///
    /// # Notes
    ///
    /// - `num_buckets` must be greater than `0`.
    fn hash(&self, key: &Key, num_buckets: usize) -> Result<usize, BucketsError>;
}

/// A fixed-capacity hash map keyed by [`Key`].
pub trait HashMap<V> {
    /// Store `value` under `key`. Existing entries with an equal key are kept.
    fn add(&mut self, key: Key, value: V) -> Result<(), BucketsError>;

    /// Get the value of the first entry with a key equal to `key`.
    fn get(&self, key: &Key) -> Result<&V, BucketsError>;

    /// Get all stored keys in bucket order.
    fn keys(&self) -> Vec<&Key>;

    /// Get the number of entries in the map.
    fn len(&self) -> usize;

    /// Check if the map is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of top-level buckets.
    fn num_buckets(&self) -> usize;

    /// Get the load factor of the map.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.num_buckets() as f64
    }

    /// Get the number of collisions in the map.
    fn num_collisions(&self) -> usize;
}
