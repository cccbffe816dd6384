//! Key schedule expansion (FIPS-197 section 5.2).

use core::convert::TryInto;

use crate::block::{Block, BLOCK_LEN};
use crate::key::{CipherKey, RoundKeys};
use crate::sbox::sbox;

// RCON[r - 1] is the round constant for schedule block r, each entry the
// GF(2^8) double of the previous one. A table instead of the doubling
// recurrence: the round count is fixed and small.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a key into `rounds + 1` round keys: 11 blocks (176 bytes) for
/// AES-128, 15 blocks (240 bytes) for AES-256.
///
/// AES-256 gets the full FIPS-197 treatment, including the SubWord-only
/// step on every word index that is a multiple of 4 but not of 8.
pub fn expand_key(key: &CipherKey) -> RoundKeys {
    let key_bytes = key.as_bytes();
    let nk = key_bytes.len() / 4;
    let total_words = 4 * (key.rounds() + 1);

    let mut w = vec![0u32; total_words];
    for (i, chunk) in key_bytes.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut blocks = Vec::with_capacity(key.rounds() + 1);
    for words in w.chunks_exact(4) {
        let mut block: Block = [0u8; BLOCK_LEN];
        for (word, out) in words.iter().zip(block.chunks_exact_mut(4)) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        blocks.push(block);
    }

    RoundKeys::new(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    // FIPS-197 appendix A.1 cipher key.
    const FIPS_KEY_128: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn schedule_starts_with_the_key_itself() {
        let round_keys = expand_key(&CipherKey::from(FIPS_KEY_128));
        assert_eq!(round_keys.get(0), &FIPS_KEY_128);
    }

    #[test]
    fn matches_fips_appendix_a1_last_round_key() {
        let round_keys = expand_key(&CipherKey::from(FIPS_KEY_128));
        let expected: Block = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(round_keys.get(10), &expected);
    }

    #[test]
    fn schedule_lengths_random_keys() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut key_128 = [0u8; 16];
            let mut key_256 = [0u8; 32];
            rng.fill_bytes(&mut key_128);
            rng.fill_bytes(&mut key_256);
            assert_eq!(expand_key(&CipherKey::from(key_128)).rounds(), 10);
            assert_eq!(expand_key(&CipherKey::from(key_256)).rounds(), 14);
        }
    }
}
