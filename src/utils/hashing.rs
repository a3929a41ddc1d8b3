//! Character-code arithmetic used by the deterministic decoders.
//!
//! Every "pseudo-random" attribute of a decoded vehicle is derived from the
//! ASCII codes of specific VIN characters. These helpers keep that arithmetic
//! in one place so the moduli applied on top of them stay readable.

/// Returns the character code of an ASCII byte as `u32`.
#[inline]
pub fn char_code(byte: u8) -> u32 {
    u32::from(byte)
}

/// Sums the character codes of all bytes in `bytes`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sum_codes(b"AB"), 65 + 66);
/// assert_eq!(sum_codes(b""), 0);
/// ```
pub fn sum_codes(bytes: &[u8]) -> u32 {
    bytes.iter().map(|&b| char_code(b)).sum()
}

/// Classic multiplicative string hash (`hash = hash * 31 + code`).
///
/// Accumulates in a wrapping 32-bit signed integer so the result matches the
/// well-known Java/JavaScript `hashCode` for ASCII input.
pub fn string_hash(bytes: &[u8]) -> i32 {
    bytes.iter().fold(0i32, |hash, &b| {
        hash.wrapping_mul(31).wrapping_add(b as i32)
    })
}
