//! Construction-time backend selection

#![allow(deprecated)]

use tracing::{debug, warn};

use super::{DesBackend, DesEncrypter, LegacyDesEncrypter, RustCryptoDesEncrypter};
use crate::cipher_mode::CipherMode;
use crate::config::CryptConfig;
use crate::error::Result;

/// DES encrypter with the backend chosen at construction
#[derive(Debug, Clone, Copy)]
pub enum DesEngine {
    /// See [`RustCryptoDesEncrypter`]
    RustCrypto(RustCryptoDesEncrypter),
    /// See [`LegacyDesEncrypter`]
    Legacy(LegacyDesEncrypter),
}

impl DesEngine {
    /// Create an engine for `backend`
    pub fn new(backend: DesBackend) -> Self {
        debug!(%backend, "building DES encrypter");
        match backend {
            DesBackend::RustCrypto => Self::RustCrypto(RustCryptoDesEncrypter),
            DesBackend::Legacy => {
                warn!("legacy DES backend is deprecated, use the rustcrypto backend");
                Self::Legacy(LegacyDesEncrypter)
            }
        }
    }

    /// Create an engine for the configured backend
    pub fn from_config(config: &CryptConfig) -> Self {
        Self::new(config.des_backend)
    }

    /// Backend in use
    pub const fn backend(&self) -> DesBackend {
        match self {
            Self::RustCrypto(_) => DesBackend::RustCrypto,
            Self::Legacy(_) => DesBackend::Legacy,
        }
    }

    /// Encrypt `data`, see [`DesEncrypter::encrypt`]
    pub fn encrypt(
        &self,
        key: &[u8],
        data: &[u8],
        mode: CipherMode,
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        match self {
            Self::RustCrypto(encrypter) => encrypter.encrypt(key, data, mode, iv),
            Self::Legacy(encrypter) => encrypter.encrypt(key, data, mode, iv),
        }
    }

    /// Encrypt using a mode given by name, see [`DesEncrypter::encrypt_named`]
    pub fn encrypt_named(
        &self,
        key: &[u8],
        data: &[u8],
        mode: &str,
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        match self {
            Self::RustCrypto(encrypter) => encrypter.encrypt_named(key, data, mode, iv),
            Self::Legacy(encrypter) => encrypter.encrypt_named(key, data, mode, iv),
        }
    }
}

impl Default for DesEngine {
    fn default() -> Self {
        Self::new(DesBackend::default())
    }
}
