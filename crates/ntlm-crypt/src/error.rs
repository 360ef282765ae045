//! Error types for cryptographic operations

use thiserror::Error;

/// Errors that can occur during cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Cipher mode is unknown or missing from a backend's mode table
    #[error("Unknown cipher mode \"{0}\"")]
    InvalidCipherMode(String),

    /// Key rejected by the block cipher primitive
    #[error("Invalid key material: {reason}")]
    InvalidKeyMaterial {
        /// Why the key was rejected
        reason: String,
    },

    /// Invalid IV size
    #[error("Invalid IV size: expected {expected}, got {actual}")]
    InvalidIvSize {
        /// Expected IV size in bytes
        expected: usize,
        /// Actual IV size in bytes
        actual: usize,
    },

    /// Hashing context could not be initialized
    #[error(
        "Unable to initialize hashing context for \"{algorithm}\": {reason}. \
         The algorithm might not be supported."
    )]
    InvalidHashContext {
        /// Requested algorithm
        algorithm: String,
        /// Why initialization failed
        reason: String,
    },

    /// The cipher primitive reported a failure
    #[error("Encryption failed: {reason}")]
    EncryptionFailure {
        /// Failure reported by the primitive
        reason: String,
    },
}

impl CryptoError {
    /// Returns true for errors caused by caller-supplied input
    /// (bad mode, key, IV or algorithm), as opposed to a failed operation.
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::EncryptionFailure { .. })
    }

    pub(crate) fn unsupported_algorithm(algorithm: &str) -> Self {
        Self::InvalidHashContext {
            algorithm: algorithm.to_string(),
            reason: "unsupported algorithm".to_string(),
        }
    }
}

/// Result alias for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
