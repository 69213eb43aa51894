use crate::core::Hasher;
use crate::error::BucketsError;
use crate::hashing::common::{invalid_key_type, key_out_of_range, reduce_be_bytes};
use crate::key::Key;
use md5::{Digest, Md5};

/// Hasher that reduces the MD5 digest of a canonical encoding of the key.
///
/// # Encodings
///
/// - Text: UTF-8 bytes.
/// - Integer: 4 bytes, little-endian two's complement. Values outside `i32` are rejected.
/// - Float: 4 bytes, little-endian IEEE-754 single precision. Finite values that overflow `f32`
///          are rejected.
/// - Bytes: not supported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Md5Hasher;

impl Md5Hasher {
    /// Compute the raw 128-bit digest of `key`.
    pub fn digest(&self, key: &Key) -> Result<[u8; 16], BucketsError> {
        let digest = match key {
            Key::Str(s) => Md5::digest(s.as_bytes()),
            Key::Int(i) => {
                let value = i32::try_from(*i).map_err(|_| key_out_of_range::<Self>(key))?;
                Md5::digest(value.to_le_bytes())
            }
            Key::Float(f) => {
                let value = *f as f32;
                if value.is_infinite() && f.is_finite() {
                    return Err(key_out_of_range::<Self>(key));
                }
                Md5::digest(value.to_le_bytes())
            }
            Key::Bytes(_) => return Err(invalid_key_type::<Self>(key)),
        };
        let mut bytes = [0_u8; 16];
        bytes.copy_from_slice(&digest);
        Ok(bytes)
    }
}

impl Hasher for Md5Hasher {
    const NAME: &'static str = "md5";

    fn hash(&self, key: &Key, num_buckets: usize) -> Result<usize, BucketsError> {
        Ok(reduce_be_bytes(&self.digest(key)?, num_buckets))
    }
}
