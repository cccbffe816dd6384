//! Buffer-level encryption modes driving the `rijndael-core` cipher.
//!
//! Only ECB exists. CTR was declared in the interface this workspace
//! descends from but never implemented, so it is deliberately absent
//! rather than stubbed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod ecb;

pub use crate::ecb::{encrypt_ecb, EcbCipher};
pub use rijndael_core::CipherError;
