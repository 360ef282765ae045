//! Configuration for hasher and encrypter construction

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::des::DesBackend;
use crate::hasher::DigestStrategy;

/// Construction-time choices for the crypto layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CryptConfig {
    /// DES backend used by [`crate::des::DesEngine::from_config`]
    pub des_backend: DesBackend,

    /// Strategy used by hashers built through [`crate::hasher::HasherFactory`]
    pub digest_strategy: DigestStrategy,
}

impl CryptConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DES backend
    #[must_use]
    pub const fn with_des_backend(mut self, backend: DesBackend) -> Self {
        self.des_backend = backend;
        self
    }

    /// Set the digest strategy
    #[must_use]
    pub const fn with_digest_strategy(mut self, strategy: DigestStrategy) -> Self {
        self.digest_strategy = strategy;
        self
    }
}
