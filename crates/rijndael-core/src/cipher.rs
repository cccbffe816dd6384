//! Single-block forward encryption.

use crate::block::Block;
use crate::key::RoundKeys;
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};

/// Encrypts one 16-byte block with pre-expanded round keys.
///
/// The round count comes from the schedule: 10 for an AES-128 schedule, 14
/// for AES-256. A pure function of its inputs, with the state held in a
/// stack-local copy, so concurrent calls over different blocks need no
/// synchronization beyond the shared read-only schedule.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round skips MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(rounds));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::CipherKey;
    use crate::schedule::expand_key;

    // FIPS-197 appendix C.1.
    const FIPS_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const FIPS_KEY_128: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const FIPS_CIPHER_128: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    // FIPS-197 appendix C.3: same plaintext, the 32-byte key 00..1f.
    const FIPS_CIPHER_256: [u8; 16] = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    #[test]
    fn aes128_matches_fips_appendix_c1() {
        let round_keys = expand_key(&CipherKey::from(FIPS_KEY_128));
        assert_eq!(encrypt_block(&FIPS_PLAIN, &round_keys), FIPS_CIPHER_128);
    }

    #[test]
    fn aes256_matches_fips_appendix_c3() {
        let key_256: [u8; 32] = core::array::from_fn(|i| i as u8);
        let round_keys = expand_key(&CipherKey::from(key_256));
        assert_eq!(encrypt_block(&FIPS_PLAIN, &round_keys), FIPS_CIPHER_256);
    }

    #[test]
    fn encryption_is_deterministic() {
        let round_keys = expand_key(&CipherKey::from(FIPS_KEY_128));
        let first = encrypt_block(&FIPS_PLAIN, &round_keys);
        let second = encrypt_block(&FIPS_PLAIN, &round_keys);
        assert_eq!(first, second);
    }
}
