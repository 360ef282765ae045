//! Incremental hashing contexts
//!
//! A [`HashContext`] can only be created through [`HashContext::new`], which
//! validates the algorithm/key combination. Finalizing consumes the context, so
//! a finalized context can never be fed again.

use std::fmt;

use digest::Digest;
use hmac::{Hmac, Mac};
use md4::Md4;
use md5::Md5;

use super::HashAlgorithm;
use crate::error::{CryptoError, Result};

/// Opaque incremental hashing state for one algorithm
#[derive(Clone)]
pub struct HashContext {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Md4(Md4),
    Md5(Md5),
    HmacMd4(Hmac<Md4>),
    HmacMd5(Hmac<Md5>),
}

impl HashContext {
    /// Create a fresh context, keyed with HMAC when `key` is given
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidHashContext` if the keyed context cannot be
    /// initialized with the supplied key.
    pub fn new(algorithm: HashAlgorithm, key: Option<&[u8]>) -> Result<Self> {
        let inner = match (algorithm, key) {
            (_, None) => return Ok(Self::unkeyed(algorithm)),
            (HashAlgorithm::Md4, Some(key)) => Inner::HmacMd4(
                <Hmac<Md4> as Mac>::new_from_slice(key).map_err(|e| invalid_key(algorithm, &e))?,
            ),
            (HashAlgorithm::Md5, Some(key)) => Inner::HmacMd5(
                <Hmac<Md5> as Mac>::new_from_slice(key).map_err(|e| invalid_key(algorithm, &e))?,
            ),
        };

        Ok(Self { inner })
    }

    /// Create a fresh plain digest context
    pub fn unkeyed(algorithm: HashAlgorithm) -> Self {
        let inner = match algorithm {
            HashAlgorithm::Md4 => Inner::Md4(Md4::new()),
            HashAlgorithm::Md5 => Inner::Md5(Md5::new()),
        };
        Self { inner }
    }

    /// Algorithm this context computes
    pub const fn algorithm(&self) -> HashAlgorithm {
        match self.inner {
            Inner::Md4(_) | Inner::HmacMd4(_) => HashAlgorithm::Md4,
            Inner::Md5(_) | Inner::HmacMd5(_) => HashAlgorithm::Md5,
        }
    }

    /// Whether this is an HMAC context
    pub const fn is_keyed(&self) -> bool {
        matches!(self.inner, Inner::HmacMd4(_) | Inner::HmacMd5(_))
    }

    /// Feed data into the context
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Md4(h) => Digest::update(h, data),
            Inner::Md5(h) => Digest::update(h, data),
            Inner::HmacMd4(m) => Mac::update(m, data),
            Inner::HmacMd5(m) => Mac::update(m, data),
        }
    }

    /// Finish the computation and return the binary digest
    pub fn finalize(self) -> Vec<u8> {
        match self.inner {
            Inner::Md4(h) => h.finalize().to_vec(),
            Inner::Md5(h) => h.finalize().to_vec(),
            Inner::HmacMd4(m) => m.finalize().into_bytes().to_vec(),
            Inner::HmacMd5(m) => m.finalize().into_bytes().to_vec(),
        }
    }
}

impl fmt::Debug for HashContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashContext")
            .field("algorithm", &self.algorithm())
            .field("keyed", &self.is_keyed())
            .finish_non_exhaustive()
    }
}

fn invalid_key(algorithm: HashAlgorithm, err: &hmac::digest::InvalidLength) -> CryptoError {
    CryptoError::InvalidHashContext {
        algorithm: format!("hmac-{algorithm}"),
        reason: err.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hash_hex(algorithm: HashAlgorithm, key: Option<&[u8]>, data: &[u8]) -> String {
        let mut context = HashContext::new(algorithm, key).unwrap();
        context.update(data);
        hex::encode(context.finalize())
    }

    #[test]
    fn test_md4_known_vectors() {
        // RFC 1320 test suite
        assert_eq!(
            hash_hex(HashAlgorithm::Md4, None, b""),
            "31d6cfe0d16ae931b73c59d7e0c089c0"
        );
        assert_eq!(
            hash_hex(HashAlgorithm::Md4, None, b"abc"),
            "a448017aaf21d8525fc10ae87aa6729d"
        );
    }

    #[test]
    fn test_md5_known_vectors() {
        // RFC 1321 test suite
        assert_eq!(
            hash_hex(HashAlgorithm::Md5, None, b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            hash_hex(HashAlgorithm::Md5, None, b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_hmac_md5_known_vectors() {
        // RFC 2104 appendix
        assert_eq!(
            hash_hex(HashAlgorithm::Md5, Some(&[0x0b; 16]), b"Hi There"),
            "9294727a3638bb1c13f48ef8158bfc9d"
        );
        assert_eq!(
            hash_hex(
                HashAlgorithm::Md5,
                Some(b"Jefe"),
                b"what do ya want for nothing?"
            ),
            "750c783e6ab0b503eaa86e310a5db738"
        );
    }

    #[test]
    fn test_context_identity() {
        let plain = HashContext::new(HashAlgorithm::Md4, None).unwrap();
        assert_eq!(plain.algorithm(), HashAlgorithm::Md4);
        assert!(!plain.is_keyed());

        let keyed = HashContext::new(HashAlgorithm::Md5, Some(b"key")).unwrap();
        assert_eq!(keyed.algorithm(), HashAlgorithm::Md5);
        assert!(keyed.is_keyed());
    }

    #[test]
    fn test_empty_hmac_key_is_accepted() {
        assert!(HashContext::new(HashAlgorithm::Md5, Some(b"")).is_ok());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = HashContext::new(HashAlgorithm::Md5, None).unwrap();
        original.update(b"a");
        let mut copy = original.clone();
        copy.update(b"b");

        assert_eq!(
            hex::encode(original.finalize()),
            hash_hex(HashAlgorithm::Md5, None, b"a")
        );
        assert_eq!(
            hex::encode(copy.finalize()),
            hash_hex(HashAlgorithm::Md5, None, b"ab")
        );
    }
}
