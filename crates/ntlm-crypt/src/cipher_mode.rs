//! Symbolic block cipher chaining modes
//!
//! [`CipherMode`] names a chaining mode independently of any backend. Each
//! DES backend keeps its own constant table translating these values into its
//! native representation; see [`crate::des::DesEncrypter::native_mode`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Block cipher chaining mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CipherMode {
    /// Cipher block chaining
    Cbc,
    /// Cipher feedback
    Cfb,
    /// Electronic codebook
    Ecb,
    /// Output feedback
    Ofb,
}

impl CipherMode {
    /// Every supported mode
    pub const ALL: [Self; 4] = [Self::Cbc, Self::Cfb, Self::Ecb, Self::Ofb];

    /// Lowercase mode name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cbc => "cbc",
            Self::Cfb => "cfb",
            Self::Ecb => "ecb",
            Self::Ofb => "ofb",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CryptoError::InvalidCipherMode(s.to_string()))
    }
}
