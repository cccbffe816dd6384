//! Error type shared across the workspace.

use thiserror::Error;

/// Input validation failures.
///
/// Every variant is reported before any cryptographic work starts; there is
/// no partial encryption and nothing to recover.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The key or the plaintext buffer was empty.
    #[error("missing input: key and plaintext must be non-empty")]
    MissingInput,

    /// The key was neither 16 nor 32 bytes long.
    #[error("invalid key length: expected 16 or 32 bytes, got {len}")]
    InvalidKeyLength {
        /// Supplied key length in bytes.
        len: usize,
    },

    /// The plaintext length was not a multiple of the 16-byte block size.
    #[error("invalid buffer length: expected a positive multiple of 16 bytes, got {len}")]
    InvalidBufferLength {
        /// Supplied buffer length in bytes.
        len: usize,
    },
}
