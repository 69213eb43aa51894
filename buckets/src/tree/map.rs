use crate::error::BucketsError;
use crate::tree::OrderedTree;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Map with sorted keys, backed by an [`OrderedTree`].
///
/// Unlike the hash tables, adding an existing key is a no-op: the first value stays.
///
/// # Examples
///
/// ```rust
/// use buckets::tree::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.add("pear", 3);
/// map.add("apple", 1);
/// map.add("pear", 4);
///
/// assert_eq!(map.get(&"pear"), Ok(&3));
/// assert_eq!(map.keys(), vec![&"apple", &"pear"]);
/// ```
#[derive(Debug, Clone)]
pub struct TreeMap<K: Ord, V, T: OrderedTree<K, V> = BTreeMap<K, V>> {
    tree: T,
    entry_type: PhantomData<(K, V)>,
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates an empty map backed by [`BTreeMap`].
    pub fn new() -> Self {
        Self::from_tree(BTreeMap::new())
    }
}

impl<K: Ord, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, T: OrderedTree<K, V>> TreeMap<K, V, T> {
    /// Wraps an existing tree.
    pub fn from_tree(tree: T) -> Self {
        Self {
            tree,
            entry_type: PhantomData,
        }
    }

    /// Store `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.tree.insert_if_absent(key, value)
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &K) -> Result<&V, BucketsError> {
        self.tree.find(key).ok_or(BucketsError::KeyNotFound)
    }

    /// Get all keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        self.tree.in_order().map(|(k, _)| k).collect()
    }

    /// Get the number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
