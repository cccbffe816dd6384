//! Block representation helpers.

/// Length in bytes of one AES block.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
///
/// During encryption the block doubles as the cipher state, viewed as a 4x4
/// byte matrix in column-major order: byte index = column * 4 + row.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
