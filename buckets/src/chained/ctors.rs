//! Implements constructors for [`ChainedTable`].
use crate::chained::ChainedTable;
use crate::core::Hasher;
use crate::error::BucketsError;
use log::debug;

impl<V, H: Hasher> ChainedTable<V, H> {
    /// Creates a new [`ChainedTable`] with `num_buckets` empty buckets and a default hasher.
    ///
    /// # Errors
    ///
    /// - [`BucketsError::ZeroBuckets`] if `num_buckets` is `0`.
    pub fn new(num_buckets: usize) -> Result<Self, BucketsError> {
        Self::with_hasher(num_buckets, H::default())
    }

    /// Creates a new [`ChainedTable`] with `num_buckets` empty buckets addressed by `hasher`.
    ///
    /// # Errors
    ///
    /// - [`BucketsError::ZeroBuckets`] if `num_buckets` is `0`.
    pub fn with_hasher(num_buckets: usize, hasher: H) -> Result<Self, BucketsError> {
        if num_buckets == 0 {
            return Err(BucketsError::ZeroBuckets);
        }

        debug!(
            "Creating chained table: num_buckets={}, hasher={}",
            num_buckets,
            H::NAME
        );

        let buckets = (0..num_buckets)
            .map(|_| Vec::new())
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(Self {
            hasher,
            buckets,
            len: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HashMap;
    use crate::hashing::hashers::*;

    #[test]
    fn test_new_rejects_zero_buckets() {
        assert_eq!(
            ChainedTable::<u32, NativeHasher>::new(0).unwrap_err(),
            BucketsError::ZeroBuckets
        );
    }

    #[test]
    fn test_new_is_empty() {
        let table = ChainedTable::<u32, NaiveHasher>::new(8).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.num_buckets(), 8);
        assert!((0..8).all(|i| table.bucket(i).is_empty()));
        assert!(table.keys().is_empty());
    }

    #[test]
    fn test_with_hasher_keeps_seeds() {
        let table =
            ChainedTable::<u32, _>::with_hasher(8, JenkinsHasher::with_seeds(3, 4)).unwrap();
        assert_eq!(table.hasher().seeds(), (3, 4));
    }
}
