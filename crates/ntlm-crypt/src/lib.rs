//! Cryptographic primitives for NTLM authentication
//!
//! This crate wraps the two low-level operations the NTLM protocol needs behind
//! stable interfaces:
//!
//! - **Hashing**: MD4, MD5 and their HMAC variants with digests that do not end
//!   the computation, so a message can keep growing after a digest was taken
//! - **Encryption**: DES in CBC, CFB, ECB and OFB modes behind swappable
//!   backends that share one key preprocessing step
//!
//! Backends are picked when a hasher or encrypter is built, either directly or
//! through [`CryptConfig`]. Nothing in this crate holds global state.
//!
//! # Examples
//!
//! ## NT hash (NTOWFv1)
//!
//! ```
//! use ntlm_crypt::{HasherFactory, MessageHasher};
//!
//! let password: Vec<u8> = "Password"
//!     .encode_utf16()
//!     .flat_map(u16::to_le_bytes)
//!     .collect();
//!
//! let mut hasher = HasherFactory::default().build("md4").expect("md4 is supported");
//! let nt_hash = hasher.update(&password).digest();
//! assert_eq!(nt_hash.len(), 16);
//! ```
//!
//! ## DES encryption with a 56-bit key
//!
//! ```
//! use ntlm_crypt::{CipherMode, CryptConfig, DesEngine};
//!
//! let engine = DesEngine::from_config(&CryptConfig::default());
//! let challenge = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
//! let response = engine
//!     .encrypt(b"7 bytes", &challenge, CipherMode::Ecb, &[])
//!     .expect("7-byte keys are expanded to DES keys");
//! assert_eq!(response.len(), 8);
//! ```

#![warn(missing_docs)]

pub mod cipher_mode;
pub mod config;
pub mod des;
pub mod error;
pub mod hasher;

pub use cipher_mode::CipherMode;
pub use config::CryptConfig;
pub use error::{CryptoError, Result};

// Re-export commonly used types
#[allow(deprecated)]
pub use des::LegacyDesEncrypter;
pub use des::{DesBackend, DesEncrypter, DesEngine, RustCryptoDesEncrypter, process_key};
pub use hasher::{DigestStrategy, HashAlgorithm, Hasher, HasherFactory, MessageHasher};
