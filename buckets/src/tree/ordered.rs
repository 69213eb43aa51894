use std::collections::BTreeMap;

/// Operations a keyed map needs from an ordered tree.
pub trait OrderedTree<K: Ord, V> {
    /// Insert `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the entry was inserted.
    fn insert_if_absent(&mut self, key: K, value: V) -> bool;

    /// Find the value stored under `key`.
    fn find(&self, key: &K) -> Option<&V>;

    /// Iterate over the entries by in-order traversal, i.e. in ascending key order.
    fn in_order(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    /// Get the number of entries in the tree.
    fn len(&self) -> usize;

    /// Check if the tree is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Ord, V> OrderedTree<K, V> for BTreeMap<K, V> {
    fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn in_order(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btree_insert_if_absent() {
        let mut tree = BTreeMap::new();
        assert!(tree.insert_if_absent(2, "b"));
        assert!(!tree.insert_if_absent(2, "c"));
        assert_eq!(tree.find(&2), Some(&"b"));
        assert_eq!(tree.find(&3), None);
        assert_eq!(OrderedTree::len(&tree), 1);
    }
}
