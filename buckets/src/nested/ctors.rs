//! Implements constructors for [`NestedTable`].
use crate::core::Hasher;
use crate::error::BucketsError;
use crate::nested::{NestedTable, Slot};
use log::debug;

impl<V, H: Hasher> NestedTable<V, H> {
    /// Creates a new [`NestedTable`] with `num_buckets` empty buckets and a default hasher.
    ///
    /// # Errors
    ///
    /// - [`BucketsError::ZeroBuckets`] if `num_buckets` is `0`.
    pub fn new(num_buckets: usize) -> Result<Self, BucketsError> {
        Self::with_hasher(num_buckets, H::default())
    }

    /// Creates a new [`NestedTable`] with `num_buckets` empty buckets addressed by `hasher`.
    ///
    /// Nested tables allocated later always use [`crate::hashing::hashers::NativeHasher`]
    /// regardless of `hasher`.
    ///
    /// # Errors
    ///
    /// - [`BucketsError::ZeroBuckets`] if `num_buckets` is `0`.
    pub fn with_hasher(num_buckets: usize, hasher: H) -> Result<Self, BucketsError> {
        if num_buckets == 0 {
            return Err(BucketsError::ZeroBuckets);
        }

        debug!(
            "Creating nested table: num_buckets={}, hasher={}",
            num_buckets,
            H::NAME
        );

        let slots = (0..num_buckets)
            .map(|_| Slot::Empty)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(Self {
            hasher,
            slots,
            len: 0,
        })
    }
}
