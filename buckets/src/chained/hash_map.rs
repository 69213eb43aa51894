//! Implements [`HashMap`] for [`ChainedTable`].
use crate::chained::ChainedTable;
use crate::core::{HashMap, Hasher};
use crate::error::BucketsError;
use crate::key::Key;
use crate::utils::entries::{chain_collisions, find_first};

impl<V, H: Hasher> HashMap<V> for ChainedTable<V, H> {
    fn add(&mut self, key: Key, value: V) -> Result<(), BucketsError> {
        let address = self.address(&key)?;
        self.buckets[address].push((key, value));
        self.len += 1;
        Ok(())
    }

    fn get(&self, key: &Key) -> Result<&V, BucketsError> {
        let address = self.address(key)?;
        find_first(&self.buckets[address], key)
    }

    fn keys(&self) -> Vec<&Key> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, _)| k))
            .collect()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    fn num_collisions(&self) -> usize {
        self.buckets.iter().map(|b| chain_collisions(b)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buckets_testing::generate_table_tests;
    use crate::hashing::hashers::*;

    fn factory<V, H: Hasher>(num_buckets: usize) -> ChainedTable<V, H> {
        ChainedTable::new(num_buckets).unwrap()
    }

    generate_table_tests!(ChainedTable, factory);

    #[test]
    fn test_duplicates_are_kept_and_first_wins() {
        let mut table = ChainedTable::<&str, NativeHasher>::new(4).unwrap();
        table.add("k".into(), "first").unwrap();
        table.add("k".into(), "second").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&"k".into()), Ok(&"first"));
        assert_eq!(table.keys(), vec![&Key::from("k"), &Key::from("k")]);
        assert_eq!(table.num_collisions(), 1);
    }

    #[test]
    fn test_keys_follow_bucket_order() {
        let mut table = ChainedTable::<u8, NaiveHasher>::new(10).unwrap();
        // Addresses under the naive hasher: 25 -> 5, 3 -> 3, 13 -> 3, 0 -> 0.
        for (i, key) in [25, 3, 13, 0].into_iter().enumerate() {
            table.add(Key::Int(key), i as u8).unwrap();
        }

        assert_eq!(
            table.keys(),
            vec![&Key::Int(0), &Key::Int(3), &Key::Int(13), &Key::Int(25)]
        );
        assert_eq!(table.bucket(3), &[(Key::Int(3), 1), (Key::Int(13), 2)]);
    }

    #[test]
    fn test_numeric_kinds_meet_under_native_hasher() {
        let mut table = ChainedTable::<&str, NativeHasher>::new(31).unwrap();
        table.add(Key::Int(1), "one").unwrap();

        assert_eq!(table.get(&Key::Float(1.0)), Ok(&"one"));
        assert_eq!(table.get(&Key::Float(1.5)), Err(BucketsError::KeyNotFound));
    }

    #[test]
    fn test_get_from_empty_table() {
        let table = ChainedTable::<u8, Md5Hasher>::new(5).unwrap();
        assert_eq!(table.get(&"missing".into()), Err(BucketsError::KeyNotFound));
    }

    #[test]
    fn test_rejected_key_leaves_table_untouched() {
        let mut table = ChainedTable::<u8, Sha256Hasher>::new(5).unwrap();
        table.add("ok".into(), 1).unwrap();

        assert!(matches!(
            table.add(Key::Int(1), 2),
            Err(BucketsError::InvalidKeyType { .. })
        ));
        assert!(matches!(
            table.get(&Key::Int(1)),
            Err(BucketsError::InvalidKeyType { .. })
        ));
        assert_eq!(table.len(), 1);
        assert_eq!(table.keys(), vec![&Key::from("ok")]);
    }

    #[test]
    fn test_naive_hasher_piles_up_similar_strings() {
        let mut table = ChainedTable::<usize, NaiveHasher>::new(100).unwrap();
        // The first character has weight 0, so all of these share one address.
        for (i, first) in ('a'..='z').enumerate() {
            table.add(format!("{}x", first).into(), i).unwrap();
        }

        assert_eq!(table.num_collisions(), 25);
        for (i, first) in ('a'..='z').enumerate() {
            assert_eq!(table.get(&format!("{}x", first).into()), Ok(&i));
        }
    }

    #[test]
    fn test_load_factor() {
        let mut table = ChainedTable::<u8, JenkinsHasher>::new(4).unwrap();
        for key in ["a", "b", "c", "d", "e", "f"] {
            table.add(key.into(), 0).unwrap();
        }
        assert_eq!(table.load_factor(), 1.5);
    }
}
