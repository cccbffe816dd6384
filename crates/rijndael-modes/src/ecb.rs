//! Electronic Codebook mode.
//!
//! Each 16-byte block is encrypted independently with the same expanded
//! key: no chaining value, no IV. Identical plaintext blocks therefore
//! yield identical ciphertext blocks under one key. That is ECB's defining
//! property and part of this module's contract, not a defect to paper over.

use core::convert::TryInto;

use rijndael_core::{encrypt_block, expand_key, Block, CipherError, CipherKey, RoundKeys, BLOCK_LEN};

/// ECB encryption context: a key validated and expanded once, then reused
/// read-only across every block.
#[derive(Clone, Debug)]
pub struct EcbCipher {
    round_keys: RoundKeys,
}

impl EcbCipher {
    /// Expands `key` into a round-key schedule.
    ///
    /// Fails with `MissingInput` for an empty key and `InvalidKeyLength`
    /// for any length other than 16 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let key = CipherKey::from_slice(key)?;
        Ok(Self {
            round_keys: expand_key(&key),
        })
    }

    /// Encrypts `plaintext` in 16-byte strides, returning a ciphertext
    /// buffer of identical length.
    ///
    /// The buffer is validated before any block is touched: empty input is
    /// `MissingInput`, a length that is not a multiple of 16 is
    /// `InvalidBufferLength`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if plaintext.is_empty() {
            return Err(CipherError::MissingInput);
        }
        if plaintext.len() % BLOCK_LEN != 0 {
            return Err(CipherError::InvalidBufferLength {
                len: plaintext.len(),
            });
        }

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for chunk in plaintext.chunks_exact(BLOCK_LEN) {
            let block: Block = chunk.try_into().expect("chunk length is sixteen");
            ciphertext.extend_from_slice(&encrypt_block(&block, &self.round_keys));
        }
        Ok(ciphertext)
    }
}

/// One-shot ECB encryption: validate the key, expand it, encrypt the buffer.
pub fn encrypt_ecb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    EcbCipher::new(key)?.encrypt(plaintext)
}
