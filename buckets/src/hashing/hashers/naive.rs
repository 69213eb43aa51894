//! Implements an intentionally weak hasher - mainly to illustrate worst-case collision behavior.
use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::common::{invalid_key_type, key_out_of_range};
use crate::key::Key;

/// Exact `trunc(value) mod num_buckets` for a finite `value`, with a non-negative result.
fn truncated_rem(value: f64, num_buckets: usize) -> usize {
    let value = value.trunc();
    // Below 2 ** 127 in magnitude a truncated float converts to i128 losslessly.
    if value.abs() < 2_f64.powi(127) {
        return (value as i128).rem_euclid(num_buckets as i128) as usize;
    }

    // Otherwise `|value| == mantissa * 2 ** exponent`, reduced one doubling at a time.
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);

    let modulus = num_buckets as u128;
    let mut rem = mantissa as u128 % modulus;
    for _ in 0..exponent {
        rem = (rem << 1) % modulus;
    }
    if value < 0.0 && rem != 0 {
        rem = modulus - rem;
    }
    rem as usize
}

/// Position-weighted sum of code points for text, truncation for numbers.
///
/// Collides readily for short or similar strings: the first character has weight `0`, so
/// `"ab"` and `"zb"` always share an address.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaiveHasher;

impl Hasher for NaiveHasher {
    const NAME: &'static str = "naive";

    fn hash(&self, key: &Key, num_buckets: usize) -> Result<usize, BucketsError> {
        debug_assert!(num_buckets > 0, r#""num_buckets" must be greater than 0"#);

        let modulus = num_buckets as u128;
        match key {
            Key::Str(s) => Ok(s.chars().enumerate().fold(0_usize, |acc, (i, ch)| {
                ((acc as u128 + ch as u128 * i as u128) % modulus) as usize
            })),
            Key::Int(i) => Ok((*i as i128).rem_euclid(modulus as i128) as usize),
            Key::Float(f) if f.is_finite() => Ok(truncated_rem(*f, num_buckets)),
            Key::Float(_) => Err(key_out_of_range::<Self>(key)),
            Key::Bytes(_) => Err(invalid_key_type::<Self>(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(key: impl Into<Key>, num_buckets: usize) -> Result<usize, BucketsError> {
        NaiveHasher.hash(&key.into(), num_buckets)
    }

    #[test]
    fn test_naive_str() {
        assert_eq!(naive("apple", 10), Ok(4));
        assert_eq!(naive("ab", 10), Ok(8));
        assert_eq!(naive("ba", 10), Ok(7));
        assert_eq!(naive("héllo", 13), Ok(8));
        assert_eq!(naive("", 10), Ok(0));
    }

    #[test]
    fn test_naive_first_char_is_ignored() {
        assert_eq!(naive("ab", 97), naive("zb", 97));
    }

    #[test]
    fn test_naive_numbers() {
        assert_eq!(naive(42, 10), Ok(2));
        assert_eq!(naive(-7, 10), Ok(3));
        assert_eq!(naive(-7.9, 10), Ok(3));
        assert_eq!(naive(7.9, 10), Ok(7));
        assert_eq!(naive(i64::MIN, 7), Ok((i64::MIN as i128).rem_euclid(7) as usize));
        assert_eq!(naive(1e300, 1), Ok(0));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_naive_float_truncation_is_exact_for_large_values() {
        let two_53 = 1_usize << 53;
        assert_eq!(naive((two_53 + 2) as f64, two_53 + 1), Ok(1));
        assert_eq!(naive(-((two_53 + 2) as f64), two_53 + 1), Ok(two_53));
        // 2 ** 200 == 4 ** 100 == 1 (mod 3)
        assert_eq!(naive(2_f64.powi(200), 3), Ok(1));
        assert_eq!(naive(-(2_f64.powi(200)), 3), Ok(2));
        assert_eq!(naive(2_f64.powi(200), usize::MAX), Ok(1 << (200 % 64)));
    }

    #[test]
    fn test_naive_rejects_bytes() {
        assert_eq!(
            naive(&b"abc"[..], 10),
            Err(BucketsError::InvalidKeyType {
                hasher: "naive",
                key_type: "bytes",
            }),
        );
    }

    #[test]
    fn test_naive_rejects_non_finite_floats() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                naive(value, 10),
                Err(BucketsError::KeyOutOfRange { .. })
            ));
        }
    }
}
