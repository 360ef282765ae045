//! Incremental message hashing with non-destructive digests
//!
//! The underlying digest primitives finalize destructively: once a digest has
//! been extracted, the state cannot be fed again. NTLM needs intermediate
//! digests over a growing message, so [`Hasher::digest`] always leaves an
//! equivalent live context behind. Two strategies are available:
//!
//! - [`DigestStrategy::Snapshot`] copies the context, finalizes the original and
//!   keeps the copy. Constant memory, one context copy per digest.
//! - [`DigestStrategy::Replay`] keeps every byte fed so far and replays it into a
//!   pristine context on each digest. Memory grows with the message and each
//!   digest re-hashes the whole message, but it only needs a way to create fresh
//!   contexts. [`ReplayHasher`] applies the same approach to any
//!   [`digest::Digest`] implementation.
//!
//! # Examples
//!
//! ```
//! use ntlm_crypt::hasher::{Hasher, HashAlgorithm, MessageHasher};
//!
//! let mut hasher = Hasher::new(HashAlgorithm::Md5);
//! let first = hasher.update(b"Hello, ").digest();
//! assert_eq!(first, hasher.digest());
//!
//! let full = hasher.update(b"World!").digest();
//! assert_eq!(full, Hasher::new(HashAlgorithm::Md5).update(b"Hello, World!").digest());
//! ```

mod context;
mod replay;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use context::HashContext;
pub use replay::ReplayHasher;

use crate::config::CryptConfig;
use crate::error::{CryptoError, Result};

/// Engine that hashes a message into a binary digest
///
/// Not to be confused with [`std::hash::Hasher`].
pub trait MessageHasher {
    /// Add data to the message to be digested
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Digest of all data added so far
    ///
    /// Hashing may continue after this call; calling it again without an
    /// intervening [`update`](Self::update) returns the same bytes.
    fn digest(&mut self) -> Vec<u8>;

    /// Size of the digest in bytes
    fn output_size(&self) -> usize;
}

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD4 (RFC 1320)
    Md4,
    /// MD5 (RFC 1321)
    Md5,
}

impl HashAlgorithm {
    /// Lowercase algorithm name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
        }
    }

    /// Digest size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Self::Md4 | Self::Md5 => 16,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "md4" => Ok(Self::Md4),
            "md5" => Ok(Self::Md5),
            _ => Err(CryptoError::unsupported_algorithm(s)),
        }
    }
}

/// How a [`Hasher`] keeps its state usable across digests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DigestStrategy {
    /// Copy the live context before finalizing it
    #[default]
    Snapshot,
    /// Buffer the message and replay it into a fresh context
    Replay,
}

enum Accumulator {
    Snapshot(HashContext),
    Replay {
        pristine: HashContext,
        buffer: Vec<u8>,
    },
}

/// Incremental hasher over a [`HashContext`]
pub struct Hasher {
    algorithm: HashAlgorithm,
    keyed: bool,
    state: Accumulator,
}

impl Hasher {
    /// Create an unkeyed hasher using the snapshot strategy
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self::from_context(HashContext::unkeyed(algorithm), DigestStrategy::Snapshot)
    }

    /// Create an HMAC hasher using the snapshot strategy
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidHashContext` if the keyed context cannot be
    /// initialized.
    pub fn keyed(algorithm: HashAlgorithm, key: &[u8]) -> Result<Self> {
        Self::with_strategy(algorithm, Some(key), DigestStrategy::Snapshot)
    }

    /// Create a hasher with an explicit strategy, keyed when `key` is given
    pub fn with_strategy(
        algorithm: HashAlgorithm,
        key: Option<&[u8]>,
        strategy: DigestStrategy,
    ) -> Result<Self> {
        let context = HashContext::new(algorithm, key)?;
        Ok(Self::from_context(context, strategy))
    }

    fn from_context(context: HashContext, strategy: DigestStrategy) -> Self {
        let algorithm = context.algorithm();
        let keyed = context.is_keyed();
        let state = match strategy {
            DigestStrategy::Snapshot => Accumulator::Snapshot(context),
            DigestStrategy::Replay => Accumulator::Replay {
                pristine: context,
                buffer: Vec::new(),
            },
        };

        Self {
            algorithm,
            keyed,
            state,
        }
    }

    /// Algorithm used by this hasher
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Whether this hasher computes an HMAC
    pub const fn is_keyed(&self) -> bool {
        self.keyed
    }

    /// Strategy used to keep the state alive across digests
    pub const fn strategy(&self) -> DigestStrategy {
        match self.state {
            Accumulator::Snapshot(_) => DigestStrategy::Snapshot,
            Accumulator::Replay { .. } => DigestStrategy::Replay,
        }
    }
}

impl MessageHasher for Hasher {
    fn update(&mut self, data: &[u8]) -> &mut Self {
        match &mut self.state {
            Accumulator::Snapshot(context) => context.update(data),
            Accumulator::Replay { buffer, .. } => buffer.extend_from_slice(data),
        }
        self
    }

    fn digest(&mut self) -> Vec<u8> {
        trace!(algorithm = %self.algorithm, keyed = self.keyed, "computing digest");
        match &mut self.state {
            Accumulator::Snapshot(context) => {
                let continuation = context.clone();
                let finished = std::mem::replace(context, continuation);
                finished.finalize()
            }
            Accumulator::Replay { pristine, buffer } => {
                let mut context = pristine.clone();
                context.update(buffer);
                context.finalize()
            }
        }
    }

    fn output_size(&self) -> usize {
        self.algorithm.output_size()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.algorithm)
            .field("keyed", &self.keyed)
            .field("strategy", &self.strategy())
            .finish()
    }
}

/// Builds hashers from algorithm names
#[derive(Debug, Clone, Copy, Default)]
pub struct HasherFactory {
    strategy: DigestStrategy,
}

impl HasherFactory {
    /// Create a factory using the configured digest strategy
    pub const fn new(config: &CryptConfig) -> Self {
        Self {
            strategy: config.digest_strategy,
        }
    }

    /// Build an unkeyed hasher for the named algorithm
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidHashContext` if the algorithm is not supported.
    pub fn build(&self, algorithm: &str) -> Result<Hasher> {
        let algorithm = algorithm.parse::<HashAlgorithm>()?;
        debug!(%algorithm, strategy = ?self.strategy, "building hasher");
        Hasher::with_strategy(algorithm, None, self.strategy)
    }

    /// Build an HMAC hasher for the named algorithm
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidHashContext` if the algorithm is not supported
    /// or the key cannot be used.
    pub fn build_keyed(&self, algorithm: &str, key: &[u8]) -> Result<Hasher> {
        let algorithm = algorithm.parse::<HashAlgorithm>()?;
        debug!(%algorithm, strategy = ?self.strategy, "building keyed hasher");
        Hasher::with_strategy(algorithm, Some(key), self.strategy)
    }
}
