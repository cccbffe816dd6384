//! GF(2^8) arithmetic for MixColumns.
//!
//! All arithmetic is modulo the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Forward MixColumns only ever multiplies
//! by 1, 2 or 3, so those are the only constants supported.

/// Multiplies a field element by two (the FIPS-197 `xtime` primitive).
#[inline]
pub(crate) fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies a field element by a forward MixColumns coefficient.
///
/// # Panics
///
/// Panics if `coeff` is not 1, 2 or 3; the forward MDS matrix contains no
/// other entries.
#[inline]
pub fn galois_mult(byte: u8, coeff: u8) -> u8 {
    match coeff {
        1 => byte,
        2 => xtime(byte),
        3 => xtime(byte) ^ byte,
        _ => panic!("unsupported MixColumns coefficient: {coeff}"),
    }
}
