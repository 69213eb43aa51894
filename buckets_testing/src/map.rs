//! Utilities for testing table implementations.
use crate::generate::{generate_keys, Fingerprint, Generate, KeyParams};
use buckets_core::core::HashMap;
use buckets_core::error::BucketsError;
use buckets_core::key::Key;
use rand::Rng;
use std::collections::HashSet;

/// Generates distinct keys paired with their index as the value.
pub fn generate_table_data<R: Rng>(
    rng: &mut R,
    size: usize,
    key_params: &KeyParams,
) -> Box<[(Key, usize)]> {
    generate_keys(rng, key_params, size)
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect()
}

/// Adds all of `data` to `map` in order.
pub fn fill<M: HashMap<usize>>(map: &mut M, data: &[(Key, usize)]) {
    for (key, val) in data {
        map.add(key.clone(), *val)
            .unwrap_or_else(|err| panic!("Key: {}, error: {}", key, err));
    }
}

/// Tests key retrieval for a given map.
///
/// Every pair of `data` must be retrievable and a third as many fresh keys must be reported
/// as missing.
pub fn test_get<R: Rng, M: HashMap<usize>>(
    rng: &mut R,
    map: &M,
    data: &[(Key, usize)],
    key_params: &KeyParams,
) {
    let keys: HashSet<Fingerprint> = data.iter().map(|(k, _)| Fingerprint::from(k)).collect();

    for (key, val) in data {
        assert_eq!(map.get(key), Ok(val), "Key: {}", key);
    }
    let mut non_existent_keys = Vec::new();
    for _ in 0..data.len().div_ceil(3) {
        loop {
            let key = Key::generate(rng, key_params);
            if !keys.contains(&Fingerprint::from(&key)) {
                non_existent_keys.push(key);
                break;
            }
        }
    }
    for key in non_existent_keys {
        assert_eq!(map.get(&key), Err(BucketsError::KeyNotFound), "Key: {}", key);
    }
}

/// Tests that `keys` returns exactly the keys of `data`, whatever the collisions.
pub fn test_keys_complete<M: HashMap<usize>>(map: &M, data: &[(Key, usize)]) {
    let keys = map.keys();
    assert_eq!(keys.len(), data.len());
    assert_eq!(map.len(), data.len());

    let expected: HashSet<Fingerprint> = data.iter().map(|(k, _)| Fingerprint::from(k)).collect();
    let actual: HashSet<Fingerprint> = keys.into_iter().map(Fingerprint::from).collect();
    assert_eq!(actual, expected);
}

/// Generates the suite of [`HashMap`] tests for a table type and one hasher.
///
/// `$factory` must be callable as `$factory(num_buckets)` and return `$Table<usize, $Hasher>`.
#[macro_export]
macro_rules! generate_table_hasher_tests {
    ($Table:ident, $factory:expr, $Hasher:ty, $name:ident, $params:expr) => {
        compose_idents::compose_idents!(test_fn = [test_add_get_, $name], {
            #[test]
            fn test_fn() {
                use crate::core::HashMap;
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;
                use $crate::*;

                let mut rng = ChaCha20Rng::seed_from_u64(0);
                let params: KeyParams = $params;

                for num_buckets in [1, 2, 7, 64, 1000] {
                    let data = generate_table_data(&mut rng, 300, &params);
                    let mut table: $Table<usize, $Hasher> = $factory(num_buckets);
                    fill(&mut table, &data);

                    assert_eq!(table.num_buckets(), num_buckets);
                    test_get(&mut rng, &table, &data, &params);
                    test_keys_complete(&table, &data);
                }
            }
        });

        compose_idents::compose_idents!(test_fn = [test_get_empty_, $name], {
            #[test]
            fn test_fn() {
                use crate::core::HashMap;
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;
                use $crate::*;

                let mut rng = ChaCha20Rng::seed_from_u64(1);
                let params: KeyParams = $params;
                let table: $Table<usize, $Hasher> = $factory(13);

                assert!(table.is_empty());
                assert!(table.keys().is_empty());
                test_get(&mut rng, &table, &[], &params);
                for key in generate_keys(&mut rng, &params, 50) {
                    assert_eq!(table.get(&key), Err(crate::error::BucketsError::KeyNotFound));
                }
            }
        });

        compose_idents::compose_idents!(test_fn = [test_hash_range_, $name], {
            #[test]
            fn test_fn() {
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;
                use $crate::*;

                let mut rng = ChaCha20Rng::seed_from_u64(2);
                let keys = generate_keys(&mut rng, &$params, 1000);
                for num_buckets in [1, 3, 10, 97, 1 << 20] {
                    test_range(&<$Hasher>::default(), &keys, num_buckets);
                }
            }
        });

        compose_idents::compose_idents!(test_fn = [test_add_get_large_, $name], {
            #[test]
            #[cfg_attr(not(feature = "_slow-tests"), ignore)]
            fn test_fn() {
                use crate::core::HashMap;
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;
                use $crate::*;

                let mut rng = ChaCha20Rng::seed_from_u64(3);
                let params: KeyParams = $params;
                let data = generate_table_data(&mut rng, 100_000, &params);
                let mut table: $Table<usize, $Hasher> = $factory(1000);
                fill(&mut table, &data);

                test_get(&mut rng, &table, &data, &params);
                test_keys_complete(&table, &data);
            }
        });
    };
}

/// Generates the suite of [`HashMap`] tests for a table type and every hasher.
///
/// Hashers are looked up in `crate::hashing::hashers` of the invoking crate.
#[macro_export]
macro_rules! generate_table_tests {
    ($Table:ident, $factory:expr) => {
        $crate::generate_table_hasher_tests!(
            $Table,
            $factory,
            crate::hashing::hashers::NaiveHasher,
            naive,
            $crate::KeyParams::default()
        );
        $crate::generate_table_hasher_tests!(
            $Table,
            $factory,
            crate::hashing::hashers::NativeHasher,
            native,
            $crate::KeyParams::any()
        );
        $crate::generate_table_hasher_tests!(
            $Table,
            $factory,
            crate::hashing::hashers::Md5Hasher,
            md5,
            $crate::KeyParams::default()
        );
        $crate::generate_table_hasher_tests!(
            $Table,
            $factory,
            crate::hashing::hashers::Sha256Hasher,
            sha256,
            $crate::KeyParams::text()
        );
        $crate::generate_table_hasher_tests!(
            $Table,
            $factory,
            crate::hashing::hashers::JenkinsHasher,
            jenkins,
            $crate::KeyParams::text()
        );
    };
}
