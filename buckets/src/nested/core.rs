//! Declares core types for [`NestedTable`].
use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::hashers::NativeHasher;
use crate::key::Key;
use log::trace;
use std::fmt::{Debug, Formatter};

/// Content of a single bucket of a [`NestedTable`].
#[derive(Debug)]
pub enum Slot<V> {
    /// Nothing was ever stored here.
    Empty,
    /// Plain chain, used only by tables with exactly one bucket.
    Entries(Vec<(Key, V)>),
    /// Nested table addressed by [`NativeHasher`]. Never reverts to a chain.
    Nested(Box<NestedTable<V>>),
}

/// Hash table whose populated buckets are nested hash tables.
///
/// A table with `n` buckets allocates nested tables of `n / 10 + 1` buckets, so nesting stops
/// at tables with a single bucket, which fall back to a plain chain.
///
/// # Guarantees
///
/// - Entries with equal keys are all kept, lookups return the first one inserted.
/// - The number of buckets at each level never changes.
///
/// # Examples
///
/// ```rust
/// use buckets::core::HashMap;
/// use buckets::hashing::hashers::NaiveHasher;
/// use buckets::key::Key;
/// use buckets::nested::{NestedTable, Slot};
///
/// let mut table = NestedTable::<u32, NaiveHasher>::new(20).unwrap();
/// // 5 and 25 share the top-level bucket 5.
/// table.append((Key::Int(5), 1)).unwrap();
/// table.append((Key::Int(25), 2)).unwrap();
///
/// assert!(matches!(table.slot(5), Slot::Nested(_)));
/// assert_eq!(table.get(&Key::Int(25)), Ok(&2));
/// assert_eq!(table.depth(), 3);
/// ```
pub struct NestedTable<V, H: Hasher = NativeHasher> {
    pub(crate) hasher: H,
    pub(crate) slots: Box<[Slot<V>]>,
    pub(crate) len: usize,
}

impl<V, H> Debug for NestedTable<V, H>
where
    V: Debug,
    H: Hasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NestedTable")
            .field("hasher", &self.hasher)
            .field("slots", &self.slots)
            .field("len", &self.len)
            .finish()
    }
}

/// Number of buckets of a nested table allocated by a table with `num_buckets` buckets.
#[inline]
pub const fn nested_num_buckets(num_buckets: usize) -> usize {
    num_buckets / 10 + 1
}

impl<V, H: Hasher> NestedTable<V, H> {
    /// Store `value` under `key`.
    ///
    /// The first entry of an empty bucket allocates a nested table (or a plain chain if this
    /// table has a single bucket), later entries are delegated to it.
    ///
    /// # Errors
    ///
    /// - Whatever the hasher returns for a key it can't address. Nothing is stored in that case.
    pub fn append(&mut self, (key, value): (Key, V)) -> Result<(), BucketsError> {
        let address = self.address(&key)?;
        let num_buckets = self.slots.len();

        match &mut self.slots[address] {
            Slot::Entries(entries) => entries.push((key, value)),
            Slot::Nested(nested) => nested.append((key, value))?,
            empty => {
                *empty = if num_buckets == 1 {
                    Slot::Entries(vec![(key, value)])
                } else {
                    let nested_buckets = nested_num_buckets(num_buckets);
                    trace!(
                        "Allocating nested table: address={}, num_buckets={}, nested_num_buckets={}",
                        address,
                        num_buckets,
                        nested_buckets
                    );
                    let mut nested = NestedTable::new(nested_buckets)?;
                    nested.append((key, value))?;
                    Slot::Nested(Box::new(nested))
                };
            }
        }

        self.len += 1;
        Ok(())
    }

    /// Compute the top-level bucket address of `key`.
    #[inline]
    pub fn address(&self, key: &Key) -> Result<usize, BucketsError> {
        self.hasher.hash(key, self.slots.len())
    }

    /// Get the hasher used to address top-level buckets.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the bucket at `index`.
    ///
    /// # Panics
    ///
    /// - If `index` is not less than the number of buckets.
    pub fn slot(&self, index: usize) -> &Slot<V> {
        &self.slots[index]
    }

    /// Number of table levels, `1` for a table without nested tables.
    pub fn depth(&self) -> usize {
        1 + self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Nested(nested) => nested.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a Key>) {
        for slot in self.slots.iter() {
            match slot {
                Slot::Empty => {}
                Slot::Entries(entries) => keys.extend(entries.iter().map(|(k, _)| k)),
                Slot::Nested(nested) => nested.collect_keys(keys),
            }
        }
    }
}
