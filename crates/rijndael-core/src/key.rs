//! Key material and expanded round keys.

use crate::block::Block;
use crate::error::CipherError;

/// AES key material, validated to a supported length on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherKey {
    /// 128-bit key (10 cipher rounds).
    Aes128([u8; 16]),
    /// 256-bit key (14 cipher rounds).
    Aes256([u8; 32]),
}

impl CipherKey {
    /// Wraps raw key bytes, rejecting unsupported lengths.
    ///
    /// An empty slice is treated as an absent key (`MissingInput`); any
    /// other length outside {16, 32} is `InvalidKeyLength`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CipherError> {
        match bytes.len() {
            0 => Err(CipherError::MissingInput),
            16 => {
                let mut key = [0u8; 16];
                key.copy_from_slice(bytes);
                Ok(Self::Aes128(key))
            }
            32 => {
                let mut key = [0u8; 32];
                key.copy_from_slice(bytes);
                Ok(Self::Aes256(key))
            }
            len => Err(CipherError::InvalidKeyLength { len }),
        }
    }

    /// Number of cipher rounds for this key size.
    #[inline]
    pub fn rounds(&self) -> usize {
        match self {
            Self::Aes128(_) => 10,
            Self::Aes256(_) => 14,
        }
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Aes128(key) => key,
            Self::Aes256(key) => key,
        }
    }
}

impl From<[u8; 16]> for CipherKey {
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(value)
    }
}

impl From<[u8; 32]> for CipherKey {
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(value)
    }
}

/// Expanded round keys: `rounds + 1` blocks of 16 bytes.
///
/// Derived exactly once per key and read-only afterwards. The schedule is
/// the only value shared across block encryptions, which is what makes the
/// per-block transform safe to invoke concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    blocks: Vec<Block>,
}

impl RoundKeys {
    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Returns the round key at the requested index (0..=rounds).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.blocks[round]
    }

    /// Number of cipher rounds this schedule supports.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.blocks.len() - 1
    }
}
