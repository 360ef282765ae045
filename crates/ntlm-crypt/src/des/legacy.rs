//! Legacy DES backend with hand-written chaining modes
//!
//! ## Deprecation
//!
//! This backend chains blocks itself on top of the raw DES block function and
//! identifies modes by name. CFB and OFB use 64-bit feedback, not the 8-bit
//! feedback some C libraries give those names, so its output is not
//! byte-compatible with them. It is kept only to check that
//! [`super::RustCryptoDesEncrypter`] produces the same ciphertext; new code
//! should use that backend.

#![allow(deprecated)]

use cipher::{Block, BlockEncrypt, KeyInit};
use des::Des;

use super::{DES_BLOCK_SIZE, DesEncrypter, block_iv, invalid_key};
use crate::cipher_mode::CipherMode;
use crate::error::{CryptoError, Result};

/// Mode table: symbolic modes to this backend's mode names
const MODE_TABLE: [(CipherMode, &str); 4] = [
    (CipherMode::Cbc, "cbc"),
    (CipherMode::Cfb, "cfb"),
    (CipherMode::Ecb, "ecb"),
    (CipherMode::Ofb, "ofb"),
];

/// DES encrypter that implements the chaining modes by hand
#[deprecated(note = "use `RustCryptoDesEncrypter` instead")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyDesEncrypter;

impl DesEncrypter for LegacyDesEncrypter {
    type NativeMode = &'static str;

    fn native_mode(mode: CipherMode) -> Option<&'static str> {
        MODE_TABLE
            .iter()
            .find(|(symbolic, _)| *symbolic == mode)
            .map(|(_, native)| *native)
    }

    fn encrypt_native(
        &self,
        key: &[u8],
        data: &[u8],
        mode: &'static str,
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let cipher = Des::new_from_slice(key).map_err(|_| invalid_key(key))?;

        match mode {
            "ecb" => Ok(encrypt_ecb(&cipher, data)),
            "cbc" => Ok(encrypt_cbc(&cipher, data, block_iv(iv)?)),
            "cfb" => Ok(encrypt_cfb(&cipher, data, block_iv(iv)?)),
            "ofb" => Ok(encrypt_ofb(&cipher, data, block_iv(iv)?)),
            other => Err(CryptoError::InvalidCipherMode(other.to_string())),
        }
    }
}

/// Copy `data` into a buffer zero-padded to whole blocks
fn zero_padded(data: &[u8]) -> Vec<u8> {
    let mut buffer = data.to_vec();
    buffer.resize(data.len().div_ceil(DES_BLOCK_SIZE) * DES_BLOCK_SIZE, 0);
    buffer
}

fn xor_in_place(target: &mut [u8], other: &[u8]) {
    for (byte, mask) in target.iter_mut().zip(other) {
        *byte ^= mask;
    }
}

fn encrypt_ecb(cipher: &Des, data: &[u8]) -> Vec<u8> {
    let mut buffer = zero_padded(data);
    for chunk in buffer.chunks_exact_mut(DES_BLOCK_SIZE) {
        cipher.encrypt_block(Block::<Des>::from_mut_slice(chunk));
    }
    buffer
}

fn encrypt_cbc(cipher: &Des, data: &[u8], iv: [u8; DES_BLOCK_SIZE]) -> Vec<u8> {
    let mut buffer = zero_padded(data);
    let mut previous = iv;
    for chunk in buffer.chunks_exact_mut(DES_BLOCK_SIZE) {
        xor_in_place(chunk, &previous);
        cipher.encrypt_block(Block::<Des>::from_mut_slice(chunk));
        previous.copy_from_slice(chunk);
    }
    buffer
}

fn encrypt_cfb(cipher: &Des, data: &[u8], iv: [u8; DES_BLOCK_SIZE]) -> Vec<u8> {
    let mut buffer = data.to_vec();
    let mut register = iv;
    for chunk in buffer.chunks_mut(DES_BLOCK_SIZE) {
        let mut keystream = register;
        cipher.encrypt_block((&mut keystream).into());
        xor_in_place(chunk, &keystream);
        // A trailing partial chunk is the last one, its feedback is unused
        if let Ok(full) = <[u8; DES_BLOCK_SIZE]>::try_from(&*chunk) {
            register = full;
        }
    }
    buffer
}

fn encrypt_ofb(cipher: &Des, data: &[u8], iv: [u8; DES_BLOCK_SIZE]) -> Vec<u8> {
    let mut buffer = data.to_vec();
    let mut register = iv;
    for chunk in buffer.chunks_mut(DES_BLOCK_SIZE) {
        cipher.encrypt_block((&mut register).into());
        xor_in_place(chunk, &register);
    }
    buffer
}
