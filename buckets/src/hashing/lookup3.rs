//! Bob Jenkins' `lookup3` hash ([Jenkins, 2006]), the little-endian `hashlittle` variant.
//!
//! All arithmetic is done on wrapping 32-bit words. The two mixing rounds are exposed as pure
//! functions on the `(a, b, c)` state so they can be checked in isolation.
//!
//! [Jenkins, 2006]: http://burtleburtle.net/bob/c/lookup3.c

/// Initial value of the internal state before the length and seeds are added.
pub const GOLDEN: u32 = 0xdeadbeef;

/// Number of bytes consumed by one [`mix`] round.
pub const BLOCK_LEN: usize = 12;

/// Reversibly mixes three 32-bit words.
#[inline]
pub const fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    a = a.wrapping_sub(c);
    a ^= c.rotate_left(4);
    c = c.wrapping_add(b);

    b = b.wrapping_sub(a);
    b ^= a.rotate_left(6);
    a = a.wrapping_add(c);

    c = c.wrapping_sub(b);
    c ^= b.rotate_left(8);
    b = b.wrapping_add(a);

    a = a.wrapping_sub(c);
    a ^= c.rotate_left(16);
    c = c.wrapping_add(b);

    b = b.wrapping_sub(a);
    b ^= a.rotate_left(19);
    a = a.wrapping_add(c);

    c = c.wrapping_sub(b);
    c ^= b.rotate_left(4);
    b = b.wrapping_add(a);

    (a, b, c)
}

/// Final mixing of three 32-bit words into `c`.
#[inline]
pub const fn final_mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));

    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));

    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));

    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));

    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));

    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));

    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));

    (a, b, c)
}

/// Reads up to 4 bytes starting at `offset` as a little-endian word, zero-padding the rest.
#[inline]
const fn read_le(data: &[u8], offset: usize, len: usize) -> u32 {
    let mut word = 0_u32;
    let mut i = 0;
    while i < len && i < 4 {
        word |= (data[offset + i] as u32) << (8 * i);
        i += 1;
    }
    word
}

/// Hashes `data` into two 32-bit values.
///
/// # Parameters
///
/// - `data`: The input bytes.
/// - `initval`: Primary seed.
/// - `initval2`: Secondary seed, added to `c` only.
///
/// # Returns
///
/// `(c, b)` where `c` is the primary hash (equal to [`hashlittle`] when `initval2 == 0`) and `b`
/// is a secondary one.
///
/// # Notes
///
/// - Empty input skips the final mixing and returns the initial state as is.
pub const fn hashlittle2(data: &[u8], initval: u32, initval2: u32) -> (u32, u32) {
    let mut a = GOLDEN.wrapping_add(data.len() as u32).wrapping_add(initval);
    let mut b = a;
    let mut c = a.wrapping_add(initval2);

    let mut offset = 0;
    let mut remaining = data.len();

    while remaining > BLOCK_LEN {
        a = a.wrapping_add(read_le(data, offset, 4));
        b = b.wrapping_add(read_le(data, offset + 4, 4));
        c = c.wrapping_add(read_le(data, offset + 8, 4));
        (a, b, c) = mix(a, b, c);
        offset += BLOCK_LEN;
        remaining -= BLOCK_LEN;
    }

    if remaining == 0 {
        return (c, b);
    }

    a = a.wrapping_add(read_le(data, offset, remaining));
    if remaining > 4 {
        b = b.wrapping_add(read_le(data, offset + 4, remaining - 4));
    }
    if remaining > 8 {
        c = c.wrapping_add(read_le(data, offset + 8, remaining - 8));
    }
    (_, b, c) = final_mix(a, b, c);

    (c, b)
}

/// Hashes `data` into a single 32-bit value.
#[inline]
pub const fn hashlittle(data: &[u8], initval: u32) -> u32 {
    hashlittle2(data, initval, 0).0
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_SCORE: &[u8] = b"Four score and seven years ago";

    #[test]
    fn test_hashlittle_reference_vectors() {
        assert_eq!(hashlittle(b"", 0), 0xdeadbeef);
        assert_eq!(hashlittle(b"", 0xdeadbeef), 0xbd5b7dde);
        assert_eq!(hashlittle(b"a", 0), 0x58d68708);
        assert_eq!(hashlittle(FOUR_SCORE, 0), 0x17770551);
        assert_eq!(hashlittle(FOUR_SCORE, 1), 0xcd628161);
    }

    #[test]
    fn test_hashlittle2_reference_vectors() {
        assert_eq!(hashlittle2(b"", 0, 0), (0xdeadbeef, 0xdeadbeef));
        assert_eq!(hashlittle2(b"", 0, 0xdeadbeef), (0xbd5b7dde, 0xdeadbeef));
        assert_eq!(hashlittle2(b"", 0xdeadbeef, 0xdeadbeef), (0x9c093ccd, 0xbd5b7dde));
        assert_eq!(hashlittle2(FOUR_SCORE, 0, 0), (0x17770551, 0xce7226e6));
    }

    #[test]
    fn test_block_boundaries() {
        // 12 bytes go through the tail, 13 through one full block plus a 1-byte tail.
        assert_eq!(hashlittle(b"hello world!", 0), 0x4b8946db);
        assert_eq!(hashlittle(b"abcdefghijklm", 0), 0x928128f9);
        assert_eq!(hashlittle(b"abc", 0), 0x0e397631);
    }

    #[test]
    fn test_hashlittle_is_const() {
        const HASH: u32 = hashlittle(b"a", 0);
        assert_eq!(HASH, 0x58d68708);
    }

    #[test]
    fn test_mix_rounds() {
        assert_ne!(mix(1, 2, 3), mix(2, 2, 3));
        // Zero is a fixed point of both rounds.
        assert_eq!(mix(0, 0, 0), (0, 0, 0));
        assert_eq!(final_mix(0, 0, 0), (0, 0, 0));
    }
}
