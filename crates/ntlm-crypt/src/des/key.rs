//! DES key preprocessing
//!
//! A DES key is 8 bytes, of which only the high 7 bits of each byte are key
//! material; the low bit of every byte is a parity bit and makes the byte's
//! bit count odd (FIPS 46-3). NTLM derives 56-bit keys as 7 raw bytes, which
//! have to be spread over 8 bytes before use.

/// Size of a DES key in bytes
pub const DES_KEY_SIZE: usize = 8;

/// Size of a raw 56-bit key without parity bits
pub const DES_56_BIT_KEY_SIZE: usize = 7;

/// Condition a raw key for the DES primitive
///
/// - 7-byte keys are expanded to 8 bytes with odd parity
/// - 8-byte keys get their parity bits set to odd parity
/// - any other length is returned unchanged; the cipher rejects it
///
/// Every backend calls this before touching the key, so identical input yields
/// identical ciphertext on all of them.
///
/// # Examples
///
/// ```
/// use ntlm_crypt::des::process_key;
///
/// let key = process_key(&[0xff; 7]);
/// assert_eq!(key, vec![0xfe; 8]);
/// ```
pub fn process_key(key: &[u8]) -> Vec<u8> {
    match <&[u8; DES_56_BIT_KEY_SIZE]>::try_from(key) {
        Ok(raw) => expand_56_bit_key(raw).to_vec(),
        Err(_) if key.len() == DES_KEY_SIZE => key.iter().map(|&b| with_odd_parity(b)).collect(),
        Err(_) => key.to_vec(),
    }
}

/// Spread 56 key bits over 8 bytes, 7 bits per byte, with parity bits
pub fn expand_56_bit_key(raw: &[u8; DES_56_BIT_KEY_SIZE]) -> [u8; DES_KEY_SIZE] {
    let mut wide = [0u8; 8];
    wide[1..].copy_from_slice(raw);
    let bits = u64::from_be_bytes(wide);

    let mut key = [0u8; DES_KEY_SIZE];
    for (i, byte) in key.iter_mut().enumerate() {
        let shift = 49 - 7 * i;
        *byte = with_odd_parity((((bits >> shift) & 0x7f) as u8) << 1);
    }
    key
}

/// Set the low bit so the byte has an odd number of set bits
pub const fn with_odd_parity(byte: u8) -> u8 {
    let high = byte & 0xfe;
    if high.count_ones() % 2 == 0 {
        high | 0x01
    } else {
        high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_parity() {
        assert_eq!(with_odd_parity(0x00), 0x01);
        assert_eq!(with_odd_parity(0x01), 0x01);
        assert_eq!(with_odd_parity(0xfe), 0xfe);
        assert_eq!(with_odd_parity(0xff), 0xfe);
        assert_eq!(with_odd_parity(0x02), 0x02);

        for byte in 0..=u8::MAX {
            assert_eq!(with_odd_parity(byte).count_ones() % 2, 1);
            assert_eq!(with_odd_parity(byte) & 0xfe, byte & 0xfe);
        }
    }

    #[test]
    fn test_expand_56_bit_key() {
        assert_eq!(expand_56_bit_key(&[0x00; 7]), [0x01; 8]);
        assert_eq!(expand_56_bit_key(&[0xff; 7]), [0xfe; 8]);

        // Key bits 1,0,0,... land in the top bit of the first byte
        assert_eq!(
            expand_56_bit_key(&[0x80, 0, 0, 0, 0, 0, 0]),
            [0x80, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01]
        );
        // Lowest key bit lands just above the parity bit of the last byte
        assert_eq!(
            expand_56_bit_key(&[0, 0, 0, 0, 0, 0, 0x01]),
            [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02]
        );
    }

    #[test]
    fn test_expand_matches_bytewise_split() {
        let raw = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde];
        let expected = [
            raw[0] >> 1,
            ((raw[0] & 0x01) << 6) | (raw[1] >> 2),
            ((raw[1] & 0x03) << 5) | (raw[2] >> 3),
            ((raw[2] & 0x07) << 4) | (raw[3] >> 4),
            ((raw[3] & 0x0f) << 3) | (raw[4] >> 5),
            ((raw[4] & 0x1f) << 2) | (raw[5] >> 6),
            ((raw[5] & 0x3f) << 1) | (raw[6] >> 7),
            raw[6] & 0x7f,
        ]
        .map(|seven| with_odd_parity(seven << 1));

        assert_eq!(expand_56_bit_key(&raw), expected);
    }

    #[test]
    fn test_process_key_lengths() {
        // Already odd parity: unchanged
        let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
        assert_eq!(process_key(&key), key.to_vec());

        // Even parity bytes get fixed
        assert_eq!(process_key(&[0x00; 8]), vec![0x01; 8]);

        assert_eq!(process_key(&[0xaa; 7]).len(), DES_KEY_SIZE);
        // All-ones key bits get a clear parity bit
        assert_eq!(process_key(&[0xff; 7]), vec![0xfe; 8]);

        // Other lengths pass through untouched
        assert_eq!(process_key(&[0x00; 5]), vec![0x00; 5]);
        assert!(process_key(&[]).is_empty());
        assert_eq!(process_key(&[0x00; 16]), vec![0x00; 16]);
    }

    #[test]
    fn test_process_key_is_deterministic() {
        let raw = b"NTLMkey";
        assert_eq!(process_key(raw), process_key(raw));
    }
}
