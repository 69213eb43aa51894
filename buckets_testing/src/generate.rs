//! Data generation utilities useful for testing.
use buckets_core::key::Key;
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;
}

/// Parameters for [`Generate`] implementations that generate numeric values.
#[derive(Debug, Clone)]
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl Default for NumParams<i64> {
    /// Stays within `i32` so that every hasher accepting integers can encode the values.
    fn default() -> Self {
        Self {
            min: i32::MIN as i64,
            max: i32::MAX as i64,
        }
    }
}

impl<R: Rng> Generate<R> for i64 {
    type GenerateParams = NumParams<i64>;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        rng.random_range(params.min..=params.max)
    }
}

impl Default for NumParams<f64> {
    fn default() -> Self {
        Self {
            min: -1e6,
            max: 1e6,
        }
    }
}

impl<R: Rng> Generate<R> for f64 {
    type GenerateParams = NumParams<f64>;

    /// Never returns an integral value, so generated floats never equal generated integers.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        loop {
            let value = rng.random_range(params.min..params.max);
            if value.fract() != 0.0 {
                return value;
            }
        }
    }
}

/// Parameters for [`Generate`] implementations that generate strings and byte strings.
#[derive(Debug, Clone)]
pub struct StringParams {
    min_length: usize,
    max_length: usize,
}

impl StringParams {
    /// Creates parameters for lengths in `[min_length, max_length]`.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: 64,
        }
    }
}

impl<R: Rng> Generate<R> for String {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        let iter = rng.sample_iter(&Alphanumeric);
        iter.take(length).map(char::from).collect()
    }
}

impl<R: Rng> Generate<R> for Vec<u8> {
    type GenerateParams = StringParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        (0..length).map(|_| rng.random::<u8>()).collect()
    }
}

/// Kinds of [`Key`] a generator may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Str,
    Int,
    Float,
    Bytes,
}

/// Parameters for generating [`Key`] values.
#[derive(Debug, Clone)]
pub struct KeyParams {
    kinds: Vec<KeyKind>,
    ints: NumParams<i64>,
    floats: NumParams<f64>,
    strings: StringParams,
}

impl KeyParams {
    /// Creates parameters generating only the given `kinds` of keys.
    pub fn new(kinds: &[KeyKind]) -> Self {
        assert!(!kinds.is_empty(), "At least one key kind is required");
        Self {
            kinds: kinds.to_vec(),
            ints: NumParams::default(),
            floats: NumParams::default(),
            strings: StringParams::default(),
        }
    }

    /// Text keys only.
    pub fn text() -> Self {
        Self::new(&[KeyKind::Str])
    }

    /// Every key kind, bytes included.
    pub fn any() -> Self {
        Self::new(&[KeyKind::Str, KeyKind::Int, KeyKind::Float, KeyKind::Bytes])
    }

    /// Replaces the length range of generated strings and byte strings.
    pub fn with_strings(mut self, strings: StringParams) -> Self {
        self.strings = strings;
        self
    }
}

impl Default for KeyParams {
    /// Text, integer and float keys.
    fn default() -> Self {
        Self::new(&[KeyKind::Str, KeyKind::Int, KeyKind::Float])
    }
}

impl<R: Rng> Generate<R> for Key {
    type GenerateParams = KeyParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        match params.kinds[rng.random_range(0..params.kinds.len())] {
            KeyKind::Str => Key::Str(String::generate(rng, &params.strings)),
            KeyKind::Int => Key::Int(i64::generate(rng, &params.ints)),
            KeyKind::Float => Key::Float(f64::generate(rng, &params.floats)),
            KeyKind::Bytes => Key::Bytes(Vec::<u8>::generate(rng, &params.strings)),
        }
    }
}

/// Hashable identity of a generated [`Key`].
///
/// [`Key`] can't be [`Eq`] because of `NaN`, but generated keys never contain `NaN` nor
/// integral floats, so two generated keys are equal exactly when their fingerprints are.
#[derive(Debug, Hash, PartialEq, Eq)]
pub enum Fingerprint {
    Str(String),
    Int(i64),
    /// Bit pattern of the float.
    Float(u64),
    Bytes(Vec<u8>),
}

impl From<&Key> for Fingerprint {
    fn from(key: &Key) -> Self {
        match key {
            Key::Str(s) => Fingerprint::Str(s.clone()),
            Key::Int(i) => Fingerprint::Int(*i),
            Key::Float(f) => Fingerprint::Float(f.to_bits()),
            Key::Bytes(b) => Fingerprint::Bytes(b.clone()),
        }
    }
}

/// Generates `size` pairwise distinct keys.
pub fn generate_keys<R: Rng>(rng: &mut R, params: &KeyParams, size: usize) -> Vec<Key> {
    let mut seen = HashSet::with_capacity(size);
    let mut keys = Vec::with_capacity(size);
    while keys.len() < size {
        let key = Key::generate(rng, params);
        if seen.insert(Fingerprint::from(&key)) {
            keys.push(key);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_generate_keys_are_distinct() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let keys = generate_keys(&mut rng, &KeyParams::any(), 2000);
        for (i, a) in keys.iter().enumerate() {
            assert!(keys[i + 1..].iter().all(|b| a != b), "Key: {}", a);
        }
    }

    #[test]
    fn test_generate_respects_string_lengths() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let params = KeyParams::text().with_strings(StringParams::new(13, 40));
        for key in generate_keys(&mut rng, &params, 200) {
            let length = key.as_str().map(str::len);
            assert!(matches!(length, Some(13..=40)), "Key: {}", key);
        }
    }

    #[test]
    fn test_generate_respects_kinds() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let keys = generate_keys(&mut rng, &KeyParams::text(), 100);
        assert!(keys.iter().all(|k| matches!(k, Key::Str(_))));
    }
}
