//! The closed set of key kinds the tables accept.
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A key stored in a table.
///
/// Integers and floats compare equal when they denote the same number (`1 == 1.0`), and the
/// [`Hash`] implementation agrees with that. `NaN` is not equal to anything, itself included.
#[derive(Debug, Clone)]
pub enum Key {
    Str(String),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
}

/// Discriminant written in front of the hashed payload so that, for example, `"a"` and `b"a"`
/// do not feed identical streams into the hasher.
const TAG_STR: u8 = 0;
const TAG_NUM: u8 = 1;
const TAG_BYTES: u8 = 2;

/// Returns the integer a float is exactly equal to, if there is one that fits `i64`.
#[inline]
fn integral(value: f64) -> Option<i64> {
    // 2 ** 63 is exactly representable, `i64::MAX as f64` is not.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if value.fract() == 0.0 && (-BOUND..BOUND).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

impl Key {
    /// Human-readable name of the key kind, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Key::Str(_) => "str",
            Key::Int(_) => "int",
            Key::Float(_) => "float",
            Key::Bytes(_) => "bytes",
        }
    }

    /// Get the text of a [`Key::Str`] key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Str(a), Key::Str(b)) => a == b,
            (Key::Bytes(a), Key::Bytes(b)) => a == b,
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a == b,
            (Key::Int(i), Key::Float(f)) | (Key::Float(f), Key::Int(i)) => integral(*f) == Some(*i),
            _ => false,
        }
    }
}

impl Hash for Key {
    fn hash<S: Hasher>(&self, state: &mut S) {
        match self {
            Key::Str(s) => {
                state.write_u8(TAG_STR);
                s.hash(state);
            }
            Key::Bytes(b) => {
                state.write_u8(TAG_BYTES);
                b.hash(state);
            }
            Key::Int(i) => {
                state.write_u8(TAG_NUM);
                state.write_i64(*i);
            }
            Key::Float(f) => {
                state.write_u8(TAG_NUM);
                match integral(*f) {
                    Some(i) => state.write_i64(i),
                    None => state.write_u64(f.to_bits()),
                }
            }
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{:?}", s),
            Key::Int(i) => write!(f, "{}", i),
            Key::Float(x) => write!(f, "{:?}", x),
            Key::Bytes(b) => write!(f, "b{:?}", b),
        }
    }
}

macro_rules! impl_from_int {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Key {
                fn from(value: $type) -> Self {
                    Key::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<f32> for Key {
    fn from(value: f32) -> Self {
        Key::Float(value as f64)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Float(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&[u8]> for Key {
    fn from(value: &[u8]) -> Self {
        Key::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(value: Vec<u8>) -> Self {
        Key::Bytes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(key: &Key) -> u64 {
        let mut state = DefaultHasher::new();
        key.hash(&mut state);
        state.finish()
    }

    #[test]
    fn test_int_equals_integral_float() {
        assert_eq!(Key::Int(1), Key::Float(1.0));
        assert_eq!(Key::Float(-3.0), Key::Int(-3));
        assert_ne!(Key::Int(1), Key::Float(1.5));
        assert_eq!(hash_of(&Key::Int(1)), hash_of(&Key::Float(1.0)));
        assert_eq!(hash_of(&Key::Int(0)), hash_of(&Key::Float(-0.0)));
    }

    #[test]
    fn test_kinds_do_not_mix() {
        assert_ne!(Key::from("1"), Key::Int(1));
        assert_ne!(Key::from("a"), Key::from(&b"a"[..]));
        assert_ne!(hash_of(&Key::from("a")), hash_of(&Key::from(&b"a"[..])));
    }

    #[test]
    fn test_nan_is_never_equal() {
        let nan = Key::Float(f64::NAN);
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn test_large_floats_are_not_truncated_into_ints() {
        assert_ne!(Key::Float(1e300), Key::Int(i64::MAX));
        assert_ne!(Key::Float(9_223_372_036_854_775_808.0), Key::Int(i64::MIN));
    }
}
