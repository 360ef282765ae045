//! DES backend built on the RustCrypto block mode crates

use cipher::block_padding::ZeroPadding;
use cipher::{BlockEncryptMut, InnerIvInit, KeyInit, StreamCipher};
use des::Des;
use digest::InnerInit;

use super::{DES_BLOCK_SIZE, DesEncrypter, block_iv, invalid_key};
use crate::cipher_mode::CipherMode;
use crate::error::{CryptoError, Result};

/// Chaining mode implementations available to [`RustCryptoDesEncrypter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RustCryptoMode {
    /// `cbc::Encryptor`
    Cbc,
    /// `cfb_mode::BufEncryptor`
    Cfb,
    /// `ecb::Encryptor`
    Ecb,
    /// `ofb::OfbCore` wrapped in `ofb::Ofb`
    Ofb,
}

const MODE_TABLE: [(CipherMode, RustCryptoMode); 4] = [
    (CipherMode::Cbc, RustCryptoMode::Cbc),
    (CipherMode::Cfb, RustCryptoMode::Cfb),
    (CipherMode::Ecb, RustCryptoMode::Ecb),
    (CipherMode::Ofb, RustCryptoMode::Ofb),
];

/// DES encrypter using the `des` crate with the RustCrypto mode crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDesEncrypter;

impl DesEncrypter for RustCryptoDesEncrypter {
    type NativeMode = RustCryptoMode;

    fn native_mode(mode: CipherMode) -> Option<RustCryptoMode> {
        MODE_TABLE
            .iter()
            .find(|(symbolic, _)| *symbolic == mode)
            .map(|(_, native)| *native)
    }

    fn encrypt_native(
        &self,
        key: &[u8],
        data: &[u8],
        mode: RustCryptoMode,
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let cipher = Des::new_from_slice(key).map_err(|_| invalid_key(key))?;

        match mode {
            RustCryptoMode::Ecb => encrypt_padded(ecb::Encryptor::<Des>::inner_init(cipher), data),
            RustCryptoMode::Cbc => {
                let iv = block_iv(iv)?;
                let encryptor = cbc::Encryptor::<Des>::inner_iv_slice_init(cipher, &iv)
                    .map_err(|_| setup_failure("cbc"))?;
                encrypt_padded(encryptor, data)
            }
            RustCryptoMode::Cfb => {
                let iv = block_iv(iv)?;
                let mut encryptor = cfb_mode::BufEncryptor::<Des>::inner_iv_slice_init(cipher, &iv)
                    .map_err(|_| setup_failure("cfb"))?;
                let mut buffer = data.to_vec();
                encryptor.encrypt(&mut buffer);
                Ok(buffer)
            }
            RustCryptoMode::Ofb => {
                let iv = block_iv(iv)?;
                let mut keystream = ofb::OfbCore::<Des>::inner_iv_slice_init(cipher, &iv)
                    .map(ofb::Ofb::<Des>::from_core)
                    .map_err(|_| setup_failure("ofb"))?;
                let mut buffer = data.to_vec();
                keystream
                    .try_apply_keystream(&mut buffer)
                    .map_err(|e| CryptoError::EncryptionFailure {
                        reason: e.to_string(),
                    })?;
                Ok(buffer)
            }
        }
    }
}

/// Encrypt whole blocks, zero-padding a trailing partial block
fn encrypt_padded<E: BlockEncryptMut>(encryptor: E, data: &[u8]) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; data.len().div_ceil(DES_BLOCK_SIZE) * DES_BLOCK_SIZE];
    buffer[..data.len()].copy_from_slice(data);

    let written = encryptor
        .encrypt_padded_mut::<ZeroPadding>(&mut buffer, data.len())
        .map_err(|_| CryptoError::EncryptionFailure {
            reason: "output buffer too small for padded message".to_string(),
        })?
        .len();
    buffer.truncate(written);
    Ok(buffer)
}

fn setup_failure(mode: &str) -> CryptoError {
    CryptoError::EncryptionFailure {
        reason: format!("unable to initialize {mode} mode"),
    }
}
