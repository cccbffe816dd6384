//! AES round transformations, each applied to the state in place.

use crate::block::{xor_in_place, Block};
use crate::gf::galois_mult;
use crate::sbox::sbox;

/// Applies SubBytes: every state byte through the forward S-box.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows: row r of the column-major 4x4 matrix rotates left by
/// r positions; row 0 stays put.
#[inline]
pub fn shift_rows(state: &mut Block) {
    // Row 1: rotate left by one.
    let tmp = state[1];
    state[1] = state[5];
    state[5] = state[9];
    state[9] = state[13];
    state[13] = tmp;

    // Row 2: rotate by two, which is two disjoint swaps.
    state.swap(2, 10);
    state.swap(6, 14);

    // Row 3: rotate left by three, i.e. right by one.
    let tmp = state[3];
    state[3] = state[15];
    state[15] = state[11];
    state[11] = state[7];
    state[7] = tmp;
}

// One column through the MDS matrix [[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]].
fn mix_single_column(col: &mut [u8; 4]) {
    let [c0, c1, c2, c3] = *col;
    col[0] = galois_mult(c0, 2) ^ galois_mult(c1, 3) ^ galois_mult(c2, 1) ^ galois_mult(c3, 1);
    col[1] = galois_mult(c0, 1) ^ galois_mult(c1, 2) ^ galois_mult(c2, 3) ^ galois_mult(c3, 1);
    col[2] = galois_mult(c0, 1) ^ galois_mult(c1, 1) ^ galois_mult(c2, 2) ^ galois_mult(c3, 3);
    col[3] = galois_mult(c0, 3) ^ galois_mult(c1, 1) ^ galois_mult(c2, 1) ^ galois_mult(c3, 2);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col_idx in 0..4 {
        let base = col_idx * 4;
        let mut column = [
            state[base],
            state[base + 1],
            state[base + 2],
            state[base + 3],
        ];
        mix_single_column(&mut column);
        state[base..base + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn shift_rows_has_period_four() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            for _ in 0..4 {
                shift_rows(&mut state);
            }
            assert_eq!(state, original);
        }
    }

    #[test]
    fn shift_rows_leaves_row_zero_alone() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!([state[0], state[4], state[8], state[12]], [0, 4, 8, 12]);
    }

    #[test]
    fn mix_columns_matches_fips_example_column() {
        // FIPS-197 section 5.1.3 example: (db, 13, 53, 45) -> (8e, 4d, a1, bc).
        let mut column = [0xdb, 0x13, 0x53, 0x45];
        mix_single_column(&mut column);
        assert_eq!(column, [0x8e, 0x4d, 0xa1, 0xbc]);
    }

    #[test]
    fn mix_columns_is_linear_over_xor() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut a = [0u8; 16];
            let mut b = [0u8; 16];
            rng.fill_bytes(&mut a);
            rng.fill_bytes(&mut b);

            let mut sum: Block = core::array::from_fn(|i| a[i] ^ b[i]);
            mix_columns(&mut sum);
            mix_columns(&mut a);
            mix_columns(&mut b);
            let expected: Block = core::array::from_fn(|i| a[i] ^ b[i]);
            assert_eq!(sum, expected);
        }
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let mut rng = rand::thread_rng();
        let mut state = [0u8; 16];
        let mut round_key = [0u8; 16];
        rng.fill_bytes(&mut state);
        rng.fill_bytes(&mut round_key);
        let original = state;
        add_round_key(&mut state, &round_key);
        add_round_key(&mut state, &round_key);
        assert_eq!(state, original);
    }
}
