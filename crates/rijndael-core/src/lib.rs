//! Naive AES (Rijndael) forward cipher.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule expansion for AES-128 and AES-256.
//! - Single-block forward encryption.
//! - Public types shared across the workspace.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened. Decryption and chaining modes are deliberately absent; the
//! `rijndael-modes` crate drives this cipher over whole buffers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{Block, BLOCK_LEN};
pub use crate::cipher::encrypt_block;
pub use crate::error::CipherError;
pub use crate::gf::galois_mult;
pub use crate::key::{CipherKey, RoundKeys};
pub use crate::schedule::expand_key;
