//! Declares core types for [`ChainedTable`].
use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::hashers::NativeHasher;
use crate::key::Key;
use std::fmt::{Debug, Formatter};

/// Hash table with a fixed number of buckets, each holding a chain of entries.
///
/// # Guarantees
///
/// - O(1) expected time for insertions and lookups, O(chain length) in the worst case.
/// - Entries with equal keys are all kept, lookups return the first one inserted.
/// - The number of buckets never changes.
///
/// # Examples
///
/// ```rust
/// use buckets::chained::ChainedTable;
/// use buckets::core::HashMap;
/// use buckets::error::BucketsError;
/// use buckets::hashing::hashers::JenkinsHasher;
/// use buckets::key::Key;
///
/// let mut book_reviews = ChainedTable::with_hasher(16, JenkinsHasher::default()).unwrap();
/// book_reviews.add("Grimms' Fairy Tales".into(), "Masterpiece.").unwrap();
/// book_reviews.add("Pride and Prejudice".into(), "Very enjoyable.").unwrap();
///
/// assert_eq!(book_reviews.get(&"Pride and Prejudice".into()), Ok(&"Very enjoyable."));
/// assert_eq!(
///     book_reviews.get(&Key::from("Les Misérables")),
///     Err(BucketsError::KeyNotFound),
/// );
/// ```
pub struct ChainedTable<V, H: Hasher = NativeHasher> {
    pub(crate) hasher: H,
    pub(crate) buckets: Box<[Vec<(Key, V)>]>,
    pub(crate) len: usize,
}

impl<V, H> Debug for ChainedTable<V, H>
where
    V: Debug,
    H: Hasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedTable")
            .field("hasher", &self.hasher)
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .finish()
    }
}

impl<V, H: Hasher> ChainedTable<V, H> {
    /// Compute the bucket address of `key`.
    #[inline]
    pub fn address(&self, key: &Key) -> Result<usize, BucketsError> {
        self.hasher.hash(key, self.buckets.len())
    }

    /// Get the hasher used to address buckets.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the entries of the bucket at `index` in insertion order.
    ///
    /// # Panics
    ///
    /// - If `index` is not less than the number of buckets.
    pub fn bucket(&self, index: usize) -> &[(Key, V)] {
        &self.buckets[index]
    }
}
