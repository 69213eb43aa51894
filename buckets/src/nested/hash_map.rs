//! Implements [`HashMap`] for [`NestedTable`].
use crate::core::{HashMap, Hasher};
use crate::error::BucketsError;
use crate::key::Key;
use crate::nested::{NestedTable, Slot};
use crate::utils::entries::{chain_collisions, find_first};

impl<V, H: Hasher> HashMap<V> for NestedTable<V, H> {
    /// Same as [`NestedTable::append`].
    fn add(&mut self, key: Key, value: V) -> Result<(), BucketsError> {
        self.append((key, value))
    }

    fn get(&self, key: &Key) -> Result<&V, BucketsError> {
        match &self.slots[self.address(key)?] {
            Slot::Empty => Err(BucketsError::KeyNotFound),
            Slot::Entries(entries) => find_first(entries, key),
            Slot::Nested(nested) => nested.get(key),
        }
    }

    fn keys(&self) -> Vec<&Key> {
        let mut keys = Vec::with_capacity(self.len);
        self.collect_keys(&mut keys);
        keys
    }

    fn len(&self) -> usize {
        self.len
    }

    fn num_buckets(&self) -> usize {
        self.slots.len()
    }

    fn num_collisions(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Empty => 0,
                Slot::Entries(entries) => chain_collisions(entries),
                Slot::Nested(nested) => nested.num_collisions(),
            })
            .sum()
    }
}
