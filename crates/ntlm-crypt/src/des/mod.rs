//! DES encryption with interchangeable backends
//!
//! Every backend implements [`DesEncrypter`]. A backend only supplies its
//! constant mode table ([`DesEncrypter::native_mode`]) and the native cipher
//! invocation ([`DesEncrypter::encrypt_native`]); mode translation and key
//! preprocessing ([`process_key`]) happen once, in [`DesEncrypter::encrypt`].
//!
//! Data handling is the same on every backend:
//!
//! - ECB and CBC zero-pad a trailing partial block
//! - CFB and OFB use 64-bit feedback and keep the input length
//! - ECB ignores the IV, the other modes need an 8-byte IV
//!
//! # Backends
//!
//! - [`RustCryptoDesEncrypter`] - RustCrypto mode crates, the default
//! - [`LegacyDesEncrypter`] - deprecated hand-chained backend kept for
//!   test-vector parity
//!
//! [`DesEngine`] selects one of them at construction time.
//!
//! # Examples
//!
//! ```
//! use ntlm_crypt::{CipherMode, DesEngine};
//!
//! let engine = DesEngine::default();
//! let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
//! let ciphertext = engine
//!     .encrypt(&key, b"Now is t", CipherMode::Cbc, &[0u8; 8])
//!     .expect("valid key and IV");
//! assert_eq!(ciphertext, [0x3f, 0xa4, 0x0e, 0x8a, 0x98, 0x4d, 0x48, 0x15]);
//! ```

mod engine;
mod key;
mod legacy;
mod rustcrypto;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use engine::DesEngine;
pub use key::{DES_56_BIT_KEY_SIZE, DES_KEY_SIZE, expand_56_bit_key, process_key, with_odd_parity};
#[allow(deprecated)]
pub use legacy::LegacyDesEncrypter;
pub use rustcrypto::{RustCryptoDesEncrypter, RustCryptoMode};

use crate::cipher_mode::CipherMode;
use crate::error::{CryptoError, Result};

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// Engine that encrypts data with the DES algorithm
pub trait DesEncrypter {
    /// Backend-specific representation of a chaining mode
    type NativeMode: Copy + fmt::Debug;

    /// Look up `mode` in this backend's mode table
    fn native_mode(mode: CipherMode) -> Option<Self::NativeMode>;

    /// Encrypt with an already processed key and translated mode
    fn encrypt_native(
        &self,
        key: &[u8],
        data: &[u8],
        mode: Self::NativeMode,
        iv: &[u8],
    ) -> Result<Vec<u8>>;

    /// Encrypt `data` and return the raw ciphertext
    ///
    /// # Errors
    ///
    /// - `CryptoError::InvalidCipherMode` if the backend has no entry for `mode`
    /// - `CryptoError::InvalidKeyMaterial` if the cipher rejects the key
    /// - `CryptoError::InvalidIvSize` if the mode needs an IV of another length
    /// - `CryptoError::EncryptionFailure` if the cipher itself fails
    fn encrypt(&self, key: &[u8], data: &[u8], mode: CipherMode, iv: &[u8]) -> Result<Vec<u8>> {
        let native = Self::native_mode(mode)
            .ok_or_else(|| CryptoError::InvalidCipherMode(mode.to_string()))?;
        let key = process_key(key);

        trace!(%mode, ?native, data_len = data.len(), "encrypting");
        self.encrypt_native(&key, data, native, iv)
    }

    /// Encrypt using a mode given by name
    fn encrypt_named(&self, key: &[u8], data: &[u8], mode: &str, iv: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(key, data, mode.parse()?, iv)
    }
}

/// Available DES backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DesBackend {
    /// RustCrypto block mode crates
    #[default]
    RustCrypto,
    /// Deprecated hand-chained backend
    Legacy,
}

impl fmt::Display for DesBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RustCrypto => f.write_str("rustcrypto"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

pub(crate) fn block_iv(iv: &[u8]) -> Result<[u8; DES_BLOCK_SIZE]> {
    iv.try_into().map_err(|_| CryptoError::InvalidIvSize {
        expected: DES_BLOCK_SIZE,
        actual: iv.len(),
    })
}

pub(crate) fn invalid_key(key: &[u8]) -> CryptoError {
    CryptoError::InvalidKeyMaterial {
        reason: format!(
            "DES requires a {DES_56_BIT_KEY_SIZE} or {DES_KEY_SIZE} byte key, got {}",
            key.len()
        ),
    }
}
